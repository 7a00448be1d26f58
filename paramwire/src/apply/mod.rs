//! Applying declared parameters through a component's mutators.
//!
//! Scalars are offered to the mutator kinds in
//! [`ValueKind::SCALAR_PRIORITY`] order and coerced to the first kind the
//! target accepts. There is no fallback: a value that does not parse as that
//! kind fails the build. Lists and maps need a mutator of exactly their
//! kind.

use serde::Serialize;

use crate::classify::{ParamShape, classify};
use crate::configurable::{Configurable, MutatorError, setter_name};
use crate::document::{Element, PARAMS_TAG};
use crate::settings::SettingsRecord;
use crate::value::{ParamValue, ValueKind};
use crate::{WireError, WireResult};

/// One entry of a `params` section after classification.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DeclaredParam {
    /// Local name of the parameter element.
    pub name: String,
    /// Structural shape and raw content.
    #[serde(flatten)]
    pub shape: ParamShape,
}

/// Reads and classifies the parameters declared on `section`.
///
/// Only the first `params` child is consulted. A parameter named `exclude`
/// is skipped entirely.
///
/// # Errors
///
/// Returns [`WireError::MalformedMapEntry`] from classification.
pub fn declared_params(section: &Element, exclude: Option<&str>) -> WireResult<Vec<DeclaredParam>> {
    let Some(params) = section.first_child_named(PARAMS_TAG) else {
        return Ok(Vec::new());
    };
    params
        .elements()
        .filter(|param| Some(param.name()) != exclude)
        .map(|param| -> WireResult<DeclaredParam> {
            Ok(DeclaredParam {
                name: param.name().to_owned(),
                shape: classify(param)?,
            })
        })
        .collect()
}

/// Applies one parameter to `target` and records it in `settings`.
///
/// # Errors
///
/// Returns [`WireError::NoMatchingMutator`] when no mutator takes the value,
/// [`WireError::Coercion`] when a scalar does not parse as the selected
/// kind, and [`WireError::MutatorRejected`] when the mutator refuses it.
pub fn apply_param(
    target: &mut dyn Configurable,
    param: DeclaredParam,
    settings: &mut SettingsRecord,
) -> WireResult<()> {
    let DeclaredParam { name, shape } = param;
    let mutator = setter_name(&name);
    let no_mutator = |component: &dyn Configurable, offered: &'static str| {
        WireError::NoMatchingMutator {
            parameter: name.clone(),
            mutator: mutator.clone(),
            shape: offered,
            component: component.component_name(),
        }
    };

    let value = match shape {
        ParamShape::Scalar(text) => {
            let Some(kind) = ValueKind::SCALAR_PRIORITY
                .into_iter()
                .find(|kind| target.accepts(&mutator, *kind))
            else {
                return Err(no_mutator(target, "a scalar"));
            };
            ParamValue::coerce(&text, kind).map_err(|source| WireError::Coercion {
                parameter: name.clone(),
                value: text,
                expected: kind,
                source,
            })?
        }
        ParamShape::OrderedList(items) => {
            if !target.accepts(&mutator, ValueKind::ListOfText) {
                return Err(no_mutator(target, ValueKind::ListOfText.as_str()));
            }
            ParamValue::ListOfText(items)
        }
        ParamShape::KeyValueMap(entries) => {
            if !target.accepts(&mutator, ValueKind::MapOfText) {
                return Err(no_mutator(target, ValueKind::MapOfText.as_str()));
            }
            ParamValue::MapOfText(entries)
        }
    };

    let kind = value.kind();
    target.set(&mutator, value).map_err(|err| match err {
        MutatorError::Unsupported { .. } => no_mutator(target, kind.as_str()),
        MutatorError::Rejected(source) => WireError::MutatorRejected {
            parameter: name.clone(),
            mutator: mutator.clone(),
            source,
        },
    })?;
    tracing::trace!(
        component = target.component_name(),
        parameter = %name,
        %mutator,
        %kind,
        "applied parameter"
    );
    settings.record(name);
    Ok(())
}

/// Applies every parameter in order, stopping at the first failure.
///
/// # Errors
///
/// Propagates the first error from [`apply_param`].
pub fn apply_all(
    target: &mut dyn Configurable,
    params: impl IntoIterator<Item = DeclaredParam>,
    settings: &mut SettingsRecord,
) -> WireResult<()> {
    params
        .into_iter()
        .try_for_each(|param| apply_param(target, param, settings))
}

/// Reads the parameters of `section` and applies them to `target`.
///
/// # Errors
///
/// Propagates classification and application failures.
pub fn apply_params(
    target: &mut dyn Configurable,
    section: &Element,
    exclude: Option<&str>,
    settings: &mut SettingsRecord,
) -> WireResult<()> {
    apply_all(target, declared_params(section, exclude)?, settings)
}
