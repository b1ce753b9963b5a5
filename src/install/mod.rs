//! Installation command resolution.
//!
//! Turns an entry's [`InstallationSpec`](crate::registry::InstallationSpec)
//! plus caller-supplied variable values into interpolated arguments and a
//! shell-ready command line.

mod placeholder;
mod shell;

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::registry::{Entry, VariableSpec};

pub use placeholder::placeholder_name;
pub use shell::{join_command_line, quote_arg};

/// Concrete values for placeholders, keyed by variable name.
pub type EnvValues = HashMap<String, String>;

/// An installation with placeholders substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedInstallation {
    pub command: String,
    pub args: Vec<String>,
    /// Variable declarations, echoed unchanged from the entry.
    pub variables: BTreeMap<String, VariableSpec>,
    #[serde(skip)]
    unresolved: Vec<String>,
}

impl ResolvedInstallation {
    /// Placeholder names left in `args` because no value was supplied, in
    /// order of first appearance.
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// Whether an unresolved placeholder is declared as secret.
    pub fn is_secret(&self, name: &str) -> bool {
        self.variables.get(name).is_some_and(|v| v.secret)
    }

    pub fn command_line(&self) -> String {
        join_command_line(&self.command, &self.args)
    }
}

/// Substitute placeholders in the entry's installation args.
///
/// Returns `None` when the entry has no installation data. Values are inserted
/// verbatim; a placeholder with no value keeps its bracketed form.
pub fn resolve_args(entry: &Entry, env: &EnvValues) -> Option<ResolvedInstallation> {
    let installation = entry.installation.as_ref()?;

    let mut unresolved: Vec<String> = Vec::new();
    let args = installation
        .args
        .iter()
        .map(|arg| match placeholder_name(arg) {
            Some(name) => match env.get(name) {
                Some(value) => value.clone(),
                None => {
                    if !unresolved.iter().any(|n| n == name) {
                        unresolved.push(name.to_string());
                    }
                    arg.clone()
                }
            },
            None => arg.clone(),
        })
        .collect();

    Some(ResolvedInstallation {
        command: installation.command.clone(),
        args,
        variables: installation.variables.clone(),
        unresolved,
    })
}

/// Build the shell command line for an entry, or `None` if it has no
/// installation data.
pub fn build_command_line(entry: &Entry, env: &EnvValues) -> Option<String> {
    resolve_args(entry, env).map(|resolved| resolved.command_line())
}
