use std::{
    io::ErrorKind as IoErrorKind,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use clap::{
    CommandFactory, FromArgMatches,
    error::{ErrorKind as ClapErrorKind, Result as ClapResult},
};
use moonbeam_codegen_typescript::CodegenConfig;

/// The name of the optional config file next to the input document.
const CONFIG_FILE: &str = ".moonbeam.toml";

#[derive(Debug)]
pub struct Main {
    pub verbose: bool,
    pub input: PathBuf,
    pub output: PathBuf,
    pub force: bool,
    pub codegen: CodegenConfig,
}

impl Main {
    pub fn parse() -> ClapResult<Main> {
        let mut cmd = MainArgs::command();
        let mut matches = cmd
            .try_get_matches_from_mut(std::env::args_os())
            .map_err(|err| err.format(&mut cmd))?;
        let args =
            MainArgs::from_arg_matches_mut(&mut matches).map_err(|err| err.format(&mut cmd))?;

        let path = config_path(&args.file);
        let file: Option<CodegenConfig> = match std::fs::read_to_string(&path) {
            Ok(contents) => Some(toml::from_str(&contents).map_err(|err| {
                cmd.error(
                    ClapErrorKind::ValueValidation,
                    format!("Failed to parse `{}`: {err}", path.display()),
                )
            })?),
            Err(err) if err.kind() == IoErrorKind::NotFound => None,
            Err(err) => {
                return Err(cmd.error(
                    ClapErrorKind::Io,
                    format!("Failed to read `{}`: {err}", path.display()),
                ));
            }
        };

        let output = args.output.unwrap_or_else(default_output);
        Ok(Main {
            verbose: args.verbose,
            input: args.file,
            output,
            force: args.force,
            codegen: args.codegen.merge(file.unwrap_or_default()),
        })
    }
}

/// Returns the path to the config file for an input document.
fn config_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CONFIG_FILE)
}

/// Returns a fresh output directory: `output/api-<unix seconds>`.
fn default_output() -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    Path::new("output").join(format!("api-{secs}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about, long_about = None)]
struct MainArgs {
    /// The path to the OpenAPI document (`.yaml` or `.json`).
    #[arg(short, long, default_value = "openapi.yaml")]
    file: PathBuf,

    /// The output directory for the generated files.
    /// Defaults to `output/api-<unix seconds>`.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Remove the output directory before generating.
    #[arg(long)]
    force: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    codegen: CodegenArgs,
}

#[derive(Debug, Default, clap::Args)]
#[command(next_help_heading = "Generated client options")]
struct CodegenArgs {
    /// The module for operations without tags. Defaults to the
    /// `default-module` in `.moonbeam.toml`, or `common`.
    #[arg(long)]
    default_module: Option<String>,

    /// Don't emit the `types/request.ts` helper; the generated functions
    /// will import `request` from it, so you must provide your own.
    #[arg(long)]
    no_runtime: bool,
}

impl CodegenArgs {
    /// Overrides options from the config file with the flags.
    fn merge(self, file: CodegenConfig) -> CodegenConfig {
        CodegenConfig {
            default_module: self.default_module.unwrap_or(file.default_module),
            runtime: file.runtime && !self.no_runtime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = MainArgs::try_parse_from(["moonbeam"]).unwrap();
        assert_eq!(args.file, PathBuf::from("openapi.yaml"));
        assert_eq!(args.output, None);
        assert!(!args.force);
        assert!(!args.verbose);
        assert_eq!(args.codegen.merge(CodegenConfig::default()), CodegenConfig::default());
    }

    #[test]
    fn test_flags() {
        let args = MainArgs::try_parse_from([
            "moonbeam",
            "-f",
            "api/spec.yaml",
            "-o",
            "out",
            "--force",
            "-v",
            "--default-module",
            "misc",
            "--no-runtime",
        ])
        .unwrap();
        assert_eq!(args.file, PathBuf::from("api/spec.yaml"));
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert!(args.force);
        assert!(args.verbose);
        assert_eq!(
            args.codegen.merge(CodegenConfig::default()),
            CodegenConfig {
                default_module: "misc".to_owned(),
                runtime: false,
            }
        );
    }

    #[test]
    fn test_flags_override_file() {
        let file: CodegenConfig = toml::from_str(indoc::indoc! {r#"
            default-module = "shared"
            runtime = false
        "#})
        .unwrap();

        let config = CodegenArgs::default().merge(file.clone());
        assert_eq!(config, file);

        let args = CodegenArgs {
            default_module: Some("misc".to_owned()),
            no_runtime: false,
        };
        assert_eq!(
            args.merge(file),
            CodegenConfig {
                default_module: "misc".to_owned(),
                runtime: false,
            }
        );
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            config_path(Path::new("api/openapi.yaml")),
            PathBuf::from("api/.moonbeam.toml")
        );
        assert_eq!(
            config_path(Path::new("openapi.yaml")),
            PathBuf::from(".moonbeam.toml")
        );
    }

    #[test]
    fn test_default_output() {
        let output = default_output();
        assert!(output.starts_with("output"));
        let name = output.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("api-"), "{name}");
    }
}
