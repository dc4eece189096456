use spintop::Animation;

fn main() {
    spintop::logging::init();

    if let Err(e) = Animation::new().run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
