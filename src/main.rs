use ndf_profile_editor::{EditorConfig, logging, run_gui};

fn main() -> anyhow::Result<()> {
    logging::init();
    let config = EditorConfig::load();
    run_gui(config).map_err(|e| anyhow::anyhow!("running editor: {e}"))
}
