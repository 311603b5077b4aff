// Unit registry: maps command-token codes to execution-unit kinds

use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::types::{ExecUnit, UnitKind};
use std::collections::HashMap;

// Global lookup table from selection code to unit kind
lazy_static::lazy_static! {
    static ref UNIT_CODES: HashMap<&'static str, UnitKind> =
        UnitKind::all().iter().map(|k| (k.code(), *k)).collect();
}

pub fn kind_for_code(code: &str) -> Option<UnitKind> {
    UNIT_CODES.get(code).copied()
}

/// Resolve an execution unit from a whitespace-delimited command string.
///
/// Only the first `-t` occurrence is honored; the full token list is stored
/// on the unit as opaque construction context. Unknown codes and commands
/// without `-t` yield `Ok(None)`; a trailing `-t` with no code is an error.
pub fn make_unit(params: &str) -> PipelineResult<Option<ExecUnit>> {
    let tokens: Vec<String> = params.split_whitespace().map(str::to_string).collect();

    for (i, token) in tokens.iter().enumerate() {
        if token != "-t" {
            continue;
        }

        let code = tokens.get(i + 1).ok_or(PipelineError::MissingUnitCode)?;
        return match kind_for_code(code) {
            Some(kind) => {
                tracing::debug!("Selected unit {:?} for code '{}'", kind, code);
                Ok(Some(ExecUnit::new(kind, tokens.clone())))
            }
            None => {
                tracing::warn!("Unrecognized unit code: '{}'", code);
                Ok(None)
            }
        };
    }

    Ok(None)
}
