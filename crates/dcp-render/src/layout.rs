//! Fixed document layout shared by both renderers
//!
//! Headings, column headers and the static paragraphs and tables that do not
//! depend on the assessment. The access-control and encryption tables are
//! static even when per-level answers were collected.

/// Document title
pub const TITLE: &str = "Data Classification Policy";

/// Purpose heading
pub const PURPOSE_HEADING: &str = "Purpose";
/// Scope heading
pub const SCOPE_HEADING: &str = "Scope";
/// Roles heading
pub const ROLES_HEADING: &str = "Roles & Responsibilities";
/// Heading above the classification tables
pub const POLICY_ROLES_HEADING: &str = "Policy Roles";
/// Levels table caption
pub const LEVELS_HEADING: &str = "Classification Levels";
/// Reference table caption
pub const REFERENCE_HEADING: &str = "Classification Reference";
/// Categories table caption
pub const CATEGORIES_HEADING: &str = "Data Categories";
/// Access matrix caption
pub const ACCESS_HEADING: &str = "Access Control Matrix";
/// Encryption table caption
pub const ENCRYPTION_HEADING: &str = "Encryption Requirements";

/// Levels table columns
pub const LEVELS_COLUMNS: [&str; 2] = ["Classification Level", "Definition"];

/// Reference table columns
pub const REFERENCE_COLUMNS: [&str; 6] = [
    "Level",
    "Sensitivity Level",
    "Business Impact",
    "Regulation",
    "Description",
    "Example",
];

/// Reference columns shaded as sub-headers (the classification criteria)
pub const REFERENCE_CRITERIA: std::ops::Range<usize> = 1..4;

/// Categories table columns
pub const CATEGORIES_COLUMNS: [&str; 4] = ["Data Category", "Description", "Examples", "Classification"];

/// Fill of primary header cells
pub const PRIMARY_HEADER_FILL: &str = "1F4E79";
/// Fill of sub-header cells
pub const SUB_HEADER_FILL: &str = "BDD7EE";

/// Follows the levels table
pub const GUIDELINES: &str = "Every information asset must be assigned exactly one classification \
level by its data owner. When an asset combines data of different levels, the highest applicable \
level applies. Classifications must be reviewed whenever the content or use of the asset changes.";

/// Follows the reference table
pub const DESCRIPTION_NOTE: &str = "The ratings above describe the expected sensitivity, business \
impact and regulatory exposure of data at each level. Data owners should use them as guidance \
when assigning a level to new data types.";

/// Follows the categories table
pub const PROCESS_RULES: &str = "Data must be labeled with its classification at creation or \
collection. Reclassification requires approval from the data owner, and any suspected mishandling \
of Confidential or Restricted data must be reported to the security team without delay.";

/// Access matrix columns
pub const ACCESS_COLUMNS: [&str; 5] = [
    "Classification Level",
    "Access Rights",
    "Approval Required",
    "Authentication",
    "Review Frequency",
];

/// Access matrix rows
pub const ACCESS_ROWS: [[&str; 5]; 4] = [
    ["Public", "Everyone", "None", "None", "Annually"],
    [
        "Internal",
        "All employees and authorized contractors",
        "Line manager",
        "Single sign-on",
        "Annually",
    ],
    [
        "Confidential",
        "Named roles with a business need",
        "Data owner",
        "Multi-factor authentication",
        "Quarterly",
    ],
    [
        "Restricted",
        "Individually authorized users only",
        "Data owner and security officer",
        "Multi-factor authentication with privileged access management",
        "Monthly",
    ],
];

/// Encryption table columns
pub const ENCRYPTION_COLUMNS: [&str; 3] = ["Classification Level", "Data at Rest", "Data in Transit"];

/// Encryption table rows
pub const ENCRYPTION_ROWS: [[&str; 3]; 4] = [
    ["Public", "Not required", "Recommended (TLS)"],
    ["Internal", "Recommended", "Required (TLS 1.2 or later)"],
    ["Confidential", "Required (AES-256)", "Required (TLS 1.2 or later)"],
    [
        "Restricted",
        "Required (AES-256 with managed keys)",
        "Required (TLS 1.2 or later with mutual authentication)",
    ],
];

/// Shown for an absent optional rating
pub const NOT_RATED: &str = "N/A";
