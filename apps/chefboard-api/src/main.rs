use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = chefboard_api::Args::parse();
	chefboard_api::run(args).await
}
