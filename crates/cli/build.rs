use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("feedtext")
        .version("1.0.0")
        .author("Feedtext Contributors")
        .about("Code-language detection and Chinese script conversion")
        .arg(clap::arg!(-v --verbose "Enable verbose diagnostics on stderr").global(true))
        .subcommand(
            clap::Command::new("classify")
                .about("Guess the programming language of a code snippet")
                .arg(clap::arg!(<INPUT> "Code file, or '-' for stdin"))
                .arg(clap::arg!(--json "Print a JSON object instead of the bare tag"))
                .arg(clap::arg!(--format "Print the (pretty-printed when JSON) snippet instead of the tag"))
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            clap::Command::new("convert")
                .about("Convert Chinese script inside text or HTML")
                .arg(clap::arg!(<INPUT> "HTML or text file, or '-' for stdin"))
                .arg(
                    clap::arg!(-m --mode <MODE> "Conversion mode")
                        .required(true)
                        .value_parser(["off", "s2t", "s2tw", "s2hk", "t2s", "t2tw", "t2hk"]),
                )
                .arg(
                    clap::arg!(--rules <FILE> "JSON file with custom rules")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(clap::arg!(--text "Treat the input as plain text instead of HTML"))
                .arg(
                    clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
        .subcommand(
            clap::Command::new("rules")
                .about("Inspect custom conversion rules")
                .subcommand(
                    clap::Command::new("fingerprint")
                        .about("Normalize a rule file and print its fingerprint")
                        .arg(clap::arg!(<INPUT> "Rules JSON file, or '-' for stdin")),
                ),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "feedtext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "feedtext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "feedtext", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "feedtext", &completions_dir).unwrap();

    println!(
        "cargo:warning=Shell completions generated in: {}",
        completions_dir.display()
    );
}
