use std::path::PathBuf;
use std::process::ExitCode;

use certdoc::application::{build_report, parse_certificate, Config, ExportOutcome, ExportUseCase};
use certdoc::domain::CertdocError;
use certdoc::infrastructure::{
    load_certificate, JsonRenderer, PresetSaveDialog, PrettyRenderer, PromptSaveDialog,
};
use certdoc::ports::Renderer;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        }
    };

    let config = Config::from_env().with_json(options.json);
    run(options, config)
}

struct Options {
    cert_file: PathBuf,
    json: bool,
    detail: Option<usize>,
    export: Option<ExportTarget>,
}

enum ExportTarget {
    Prompt,
    Path(PathBuf),
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut cert_file = None;
    let mut json = false;
    let mut detail = None;
    let mut export = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--json" || arg == "-j" {
            json = true;
        } else if arg == "--detail" || arg == "-d" {
            i += 1;
            let row = args
                .get(i)
                .ok_or_else(|| format!("--detail needs a row number\n\n{}", usage()))?;
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("invalid row number: {}\n\n{}", row, usage()))?;
            detail = Some(row);
        } else if arg == "--export" || arg == "-e" {
            export = Some(ExportTarget::Prompt);
        } else if arg == "--out" || arg == "-o" {
            i += 1;
            let path = args
                .get(i)
                .ok_or_else(|| format!("--out needs a path\n\n{}", usage()))?;
            export = Some(ExportTarget::Path(PathBuf::from(path)));
        } else if arg == "--help" || arg == "-h" {
            return Err(usage());
        } else if arg.starts_with('-') {
            return Err(format!("unknown option: {}\n\n{}", arg, usage()));
        } else if cert_file.is_none() {
            cert_file = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument: {}\n\n{}", arg, usage()));
        }
        i += 1;
    }

    match cert_file {
        Some(cert_file) => Ok(Options { cert_file, json, detail, export }),
        None => Err(usage()),
    }
}

fn usage() -> String {
    "usage: certdoc [--json] [--detail ROW] [--export | --out PATH] <CERT_FILE>\n\n\
    Prints a certificate inspection report: issuer/subject facts, validity,\n\
    fingerprints and the full property table. Accepts PEM or DER input.\n\n\
    Options:\n  \
      --json, -j        Output the report as JSON\n  \
      --detail ROW, -d  Print the detail text for the given table row (0-7)\n  \
      --export, -e      Export the raw certificate, prompting for a path\n  \
      --out PATH, -o    Export the raw certificate to PATH\n\n\
    Environment:\n  \
      CERTDOC_EXPORT_NAME  Suggested export filename [default: Certificate.cer]\n  \
      CERTDOC_EXPORT_EXT   Export extension filter [default: cer]"
        .to_string()
}

fn run(options: Options, config: Config) -> ExitCode {
    let der = match load_certificate(&options.cert_file) {
        Ok(der) => der,
        Err(e) => return fail(e),
    };

    let cert = match parse_certificate(&der) {
        Ok(cert) => cert,
        Err(e) => return fail(e),
    };

    if let Some(target) = options.export {
        let outcome = match target {
            ExportTarget::Prompt => {
                ExportUseCase::new(PromptSaveDialog::new(), config).execute(&cert)
            }
            ExportTarget::Path(path) => {
                ExportUseCase::new(PresetSaveDialog::new(path), config).execute(&cert)
            }
        };
        return match outcome {
            Ok(ExportOutcome::Written { path, bytes }) => {
                println!("exported {} bytes to {}", bytes, path.display());
                ExitCode::SUCCESS
            }
            Ok(ExportOutcome::Cancelled) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Unable to export certificate!");
                fail(e)
            }
        };
    }

    let report = build_report(&cert);

    if let Some(row) = options.detail {
        return match report.table.detail_text(row) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => fail(e),
        };
    }

    if config.json_output {
        print!("{}", JsonRenderer::new().render(&report));
    } else {
        print!("{}", PrettyRenderer::new().render(&report));
    }
    ExitCode::SUCCESS
}

fn fail(e: CertdocError) -> ExitCode {
    eprintln!("{}", e);
    ExitCode::from(e.class.exit_code() as u8)
}
