use owo_colors::OwoColorize;

pub const BANNER: &str = r"       _         _        _
  __ _| |__  ___| |_ __ _| |_ _   _ ___
 / _` | '_ \/ __| __/ _` | __| | | / __|
| (_| | | | \__ \ || (_| | |_| |_| \__ \
 \__, |_| |_|___/\__\__,_|\__|\__,_|___/
 |___/

 Summarise the open issues on your GitHub repositories.";

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}
