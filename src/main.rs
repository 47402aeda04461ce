use wellbox::Playground;

fn main() {
    env_logger::init();

    if let Err(e) = Playground::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
