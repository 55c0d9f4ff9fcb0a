use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    scp_shell::run_shell()
}
