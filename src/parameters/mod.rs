pub mod syntax;

use crate::{
    cli::DisassembleArgs,
    disassemble::{Disassembler, DEFAULT_TOOL},
    parameters::syntax::Syntax,
};
use std::ffi::OsString;

/// Environment variable naming the objdump to use, e.g. a cross binutils one.
pub const OBJDUMP_VARIABLE: &str = "OBJDUMP";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Parameters {
    pub objdump: String,
    pub syntax: Syntax,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            objdump: DEFAULT_TOOL.to_string(),
            syntax: Syntax::default(),
        }
    }
}

impl Parameters {
    pub fn from_env() -> Self {
        Self::with_objdump_variable(std::env::var_os(OBJDUMP_VARIABLE))
    }

    /// Defaults, with the tool replaced by a non-empty `OBJDUMP` value.
    pub fn with_objdump_variable(value: Option<OsString>) -> Self {
        let mut parameters = Parameters::default();

        match value.map(OsString::into_string) {
            Some(Ok(objdump)) if !objdump.is_empty() => {
                parameters.objdump = objdump;
            }
            Some(Err(raw)) => {
                log::warn!(
                    "ignoring {} = {:?}, it is not valid UTF-8",
                    OBJDUMP_VARIABLE,
                    raw
                );
            }
            _ => {}
        }

        parameters
    }

    pub fn apply_cli(&mut self, args: &DisassembleArgs) {
        if let Some(objdump) = &args.objdump {
            self.objdump = objdump.clone();
        }

        if args.intel {
            self.syntax = Syntax::Intel;
        }
    }

    pub fn disassembler(&self) -> Disassembler {
        Disassembler {
            tool: self.objdump.clone(),
            syntax: self.syntax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_defaults() {
        let mut parameters = Parameters::default();
        parameters.apply_cli(&DisassembleArgs {
            intel: true,
            objdump: Some("llvm-objdump".to_string()),
        });

        assert_eq!(
            parameters.disassembler(),
            Disassembler {
                tool: "llvm-objdump".to_string(),
                syntax: Syntax::Intel,
            }
        );
    }

    #[test]
    fn objdump_variable_replaces_default_tool() {
        let parameters = Parameters::with_objdump_variable(Some(
            OsString::from("x86_64-linux-gnu-objdump"),
        ));
        assert_eq!(parameters.objdump, "x86_64-linux-gnu-objdump");

        assert_eq!(
            Parameters::with_objdump_variable(None),
            Parameters::default()
        );
        assert_eq!(
            Parameters::with_objdump_variable(Some(OsString::new())),
            Parameters::default()
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_objdump_variable_is_ignored() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![b'o', 0xff, b'd']);
        assert_eq!(
            Parameters::with_objdump_variable(Some(raw)),
            Parameters::default()
        );
    }

    #[test]
    fn cli_beats_environment_beats_default() {
        // The only test touching OBJDUMP, the others go through
        // with_objdump_variable
        std::env::set_var(OBJDUMP_VARIABLE, "cross-objdump");
        let mut parameters = Parameters::from_env();
        assert_eq!(parameters.objdump, "cross-objdump");

        parameters.apply_cli(&DisassembleArgs {
            intel: false,
            objdump: Some("llvm-objdump".to_string()),
        });
        assert_eq!(parameters.disassembler().tool, "llvm-objdump");

        std::env::set_var(OBJDUMP_VARIABLE, "");
        assert_eq!(Parameters::from_env().objdump, DEFAULT_TOOL);

        std::env::remove_var(OBJDUMP_VARIABLE);
        assert_eq!(Parameters::from_env(), Parameters::default());
    }

    #[test]
    fn empty_cli_keeps_defaults() {
        let mut parameters = Parameters::default();
        parameters.apply_cli(&DisassembleArgs::default());

        assert_eq!(parameters.disassembler(), Disassembler::default());
    }
}
