use anyhow::Result;

fn main() -> Result<()> {
    context_engineer_cli::main_entry()
}
