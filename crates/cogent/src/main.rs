use cogent_core::init_logging;

mod app;
mod commands;

fn main() {
    let app = app::build_cli();
    let matches = app.get_matches();

    let verbose = matches.get_flag("verbose");
    let quiet = !verbose;
    init_logging(quiet);

    match commands::run_command(&matches) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("cogent: {e}");
            std::process::exit(1);
        }
    }
}
