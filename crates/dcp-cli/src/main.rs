use dcp_cli::{cli, generate, generate_args, group, init_tracing};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    let log_json = matches.get_flag("log-json")
        || matches
            .subcommand()
            .is_some_and(|(_, args)| args.get_flag("log-json"));
    init_tracing(log_json);

    let output = match matches.subcommand() {
        Some(("generate", args)) => generate(&generate_args(args)).await?,
        Some(("group", args)) => {
            let bundle = args.get_one::<PathBuf>("bundle").cloned().unwrap_or_default();
            group(&bundle).await?
        }
        _ => anyhow::bail!("unknown subcommand"),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
