use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use std::time::Duration;

use jstree::debug::enable_debug;
use jstree::error::Result;
use jstree::{assemble, dump, Config, ErrorFormatter, TreeView};

struct Options {
    input: String,
    json: bool,
    config: Config,
}

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--concurrent] [--deadline-ms <ms>] [--json] [--debug] <acorn-output.json | ->",
        program
    );
    process::exit(1);
}

fn parse_args(args: &[String]) -> Options {
    let program = args.first().map(String::as_str).unwrap_or("jstree");
    let mut input = None;
    let mut json = false;
    let mut config = Config::default();

    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--concurrent" => config = config.concurrent(),
            "--json" => json = true,
            "--debug" => enable_debug(),
            "--deadline-ms" => match rest.next().and_then(|ms| ms.parse::<u64>().ok()) {
                Some(ms) => config = config.with_deadline(Duration::from_millis(ms)),
                None => usage(program),
            },
            _ if input.is_none() => input = Some(arg.clone()),
            _ => usage(program),
        }
    }

    match input {
        Some(input) => Options {
            input,
            json,
            config,
        },
        None => usage(program),
    }
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

fn run(options: &Options) -> Result<String> {
    let text = read_input(&options.input)?;
    let document: serde_json::Value = serde_json::from_str(&text)?;
    let program = assemble(TreeView::new(&document), &options.config)?;

    if options.json {
        Ok(serde_json::to_string_pretty(&program)? + "\n")
    } else {
        Ok(dump(&program))
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    match run(&options) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!(
                "{}",
                ErrorFormatter::new(&err).with_filename(&options.input).format()
            );
            process::exit(1);
        }
    }
}
