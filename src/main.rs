use colored::Colorize;

fn main() {
    if let Err(err) = lvsreg::cli::run() {
        if log::log_enabled!(log::Level::Error) {
            log::error!("{err:#}");
        } else {
            eprintln!("{err:#}");
        }
        eprintln!("{}", "Failed".bright_white().on_red().bold());
        std::process::exit(1);
    }
}
