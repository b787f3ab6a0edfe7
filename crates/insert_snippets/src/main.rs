// crates/insert_snippets/src/main.rs

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("insert_snippets")
        .version("0.1.0")
        .about("Outputs a file with `!snippet` declarations replaced by the snippets they reference")
        .arg(
            Arg::new("file_path")
                .help("Path of the file to render")
                .required(true),
        )
        .arg(
            Arg::new("skip_checksum")
                .long("skip-checksum")
                .help("Don't verify snippet checksums")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let file_path = matches.get_one::<String>("file_path").unwrap();
    let skip_checksum = *matches.get_one::<bool>("skip_checksum").unwrap();

    match insert_snippets::render_file(file_path, skip_checksum) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    }
}
