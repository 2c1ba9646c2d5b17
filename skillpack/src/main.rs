fn main() -> anyhow::Result<()> {
    skillpack::run_cli()
}
