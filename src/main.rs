use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

use anyhow::Context as _;
use log::{debug, error, info};
use seahorse::{App, Context, Flag, FlagType};

use person_card::input::{PersonFile, Report};
use person_card::make_report;

const NAME_PROMPT: &str = "Введите Фамилию, Имя и Отчество по-русски: ";
const BIRTHDATE_PROMPT: &str = "Введите дату рождения (dd.mm.yyyy или dd/mm/yyyy): ";

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    // anything more verbose would be interleaved with the prompts
    set_env_if_absent("RUST_APP_LOG", || "warn");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .flag(
            Flag::new("name", FlagType::String)
                .description("[optional] The full name. Asked for interactively if missing."),
        )
        .flag(
            Flag::new("birthdate", FlagType::String).description(
                "[optional] The birthdate as dd.mm.yyyy or dd/mm/yyyy. Asked for interactively if missing.",
            ),
        )
        .flag(
            Flag::new("input", FlagType::String)
                .description("[optional] Path to a toml file with a [person] table."),
        )
        .flag(Flag::new("json", FlagType::Bool).description("[optional] Prints the result as json."))
        .action(|context: &Context| exit_on_error(run(context)));

    app.run(args);
}

fn exit_on_error(result: anyhow::Result<()>) {
    if let Err(e) = result {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use std::path::PathBuf;

    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn optional_path_flag(&self, name: &str) -> Option<PathBuf> {
            self.optional_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

/// Prints the `message` and reads a single line from stdin, without the line break.
fn prompt(message: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;

    if read == 0 {
        anyhow::bail!("unexpected end of input");
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Collects the full name and the birthdate from the input file if one is given,
/// otherwise from the flags, asking on the terminal for missing values.
fn read_input(context: &Context) -> anyhow::Result<(String, String)> {
    if let Some(path) = context.optional_path_flag("input") {
        info!("reading person from \"{}\"", path.display());
        let file = PersonFile::from_path(&path)?;

        return Ok((
            file.person().full_name().to_string(),
            file.person().birthdate().to_string(),
        ));
    }

    let full_name = match context.optional_string_flag("name") {
        Some(full_name) => full_name,
        None => prompt(NAME_PROMPT)?,
    };

    let birthdate = match context.optional_string_flag("birthdate") {
        Some(birthdate) => birthdate,
        None => prompt(BIRTHDATE_PROMPT)?,
    };

    Ok((full_name, birthdate))
}

fn print_report(report: &Report, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }

    Ok(())
}

fn run(context: &Context) -> anyhow::Result<()> {
    if !context.args.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}", context.args);
    }

    let (full_name, birthdate) = read_input(context)?;
    debug!("full name: \"{}\", birthdate: \"{}\"", full_name, birthdate);

    let report = make_report(&full_name, &birthdate)?;

    print_report(&report, context.bool_flag("json"))
}
