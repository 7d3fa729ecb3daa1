//! Declarative template configuration
//!
//! Templates can be described with serde-compatible structures and built into
//! matchers at load time. Mode tags are kept as strings so that unknown tags
//! surface as [`TemplateError::InvalidMatchMode`] when the template is built.
//!
//! ```json
//! {
//!   "predicate": "http://xmlns.com/foaf/0.1/age",
//!   "object": { "type": "numeric", "value": 18, "mode": ">=", "strict": true }
//! }
//! ```

use super::{
    AnyOf, LiteralMatcher, NamedNodeMatcher, Not, NumericMatcher, QuadMatcher, SlotSpec,
    TemplateError, TemplateResult, TermMatch, ValueMatcher,
};
use crate::rdf::Term;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

fn default_mode() -> String {
    "==".to_string()
}

/// Description of a term template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TermTemplateConfig {
    /// [`ValueMatcher`]
    Value {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default = "default_mode")]
        mode: String,
    },
    /// [`NamedNodeMatcher`]
    NamedNode {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default = "default_mode")]
        mode: String,
    },
    /// [`LiteralMatcher`]
    Literal {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default = "default_mode")]
        mode: String,
        #[serde(default)]
        lang: Option<String>,
        #[serde(default)]
        datatype: Option<String>,
    },
    /// [`NumericMatcher`]
    Numeric {
        #[serde(default)]
        value: Option<f64>,
        #[serde(default = "default_mode")]
        mode: String,
        #[serde(default)]
        strict: bool,
    },
    /// [`Not`]
    Not { inner: Box<TermTemplateConfig> },
    /// [`AnyOf`]
    AnyOf {
        #[serde(default)]
        members: Vec<TermTemplateConfig>,
    },
    /// The default graph term; in a graph slot it matches every graph
    DefaultGraph,
}

impl TermTemplateConfig {
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the described template
    pub fn build(&self) -> TemplateResult<Arc<dyn TermMatch>> {
        let template: Arc<dyn TermMatch> = match self {
            TermTemplateConfig::Value { values, mode } => {
                Arc::new(ValueMatcher::new(values.iter().cloned(), mode.parse()?)?)
            }
            TermTemplateConfig::NamedNode { values, mode } => {
                Arc::new(NamedNodeMatcher::new(values.iter().cloned(), mode.parse()?)?)
            }
            TermTemplateConfig::Literal {
                values,
                mode,
                lang,
                datatype,
            } => {
                let mut template = LiteralMatcher::new(values.iter().cloned(), mode.parse()?)?;
                if let Some(lang) = lang {
                    template = template.with_lang(lang.as_str());
                }
                if let Some(datatype) = datatype {
                    template = template.with_datatype(datatype.as_str());
                }
                Arc::new(template)
            }
            TermTemplateConfig::Numeric { value, mode, strict } => {
                Arc::new(NumericMatcher::new(*value, mode.parse()?, *strict)?)
            }
            TermTemplateConfig::Not { inner } => Arc::new(Not(inner.build()?)),
            TermTemplateConfig::AnyOf { members } => Arc::new(AnyOf::new(
                members
                    .iter()
                    .map(TermTemplateConfig::build)
                    .collect::<TemplateResult<Vec<_>>>()?,
            )),
            TermTemplateConfig::DefaultGraph => Arc::new(Term::DefaultGraph),
        };
        Ok(template)
    }
}

/// Quad slot description: a bare string matches the term value exactly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotConfig {
    Value(String),
    Template(TermTemplateConfig),
}

impl SlotConfig {
    fn build(&self) -> TemplateResult<SlotSpec> {
        match self {
            SlotConfig::Value(value) => Ok(SlotSpec::Value(value.clone())),
            SlotConfig::Template(template) => Ok(SlotSpec::Matcher(template.build()?)),
        }
    }
}

/// Description of a [`QuadMatcher`]; absent slots are wildcards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadTemplateConfig {
    #[serde(default)]
    pub subject: Option<SlotConfig>,
    #[serde(default)]
    pub predicate: Option<SlotConfig>,
    #[serde(default)]
    pub object: Option<SlotConfig>,
    #[serde(default)]
    pub graph: Option<SlotConfig>,
    #[serde(default)]
    pub negate: bool,
}

impl QuadTemplateConfig {
    pub fn from_json(json: &str) -> TemplateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the described quad template
    pub fn build(&self) -> TemplateResult<QuadMatcher> {
        self.try_build().inspect_err(|e| {
            debug!(error = %e, "quad template configuration rejected");
        })
    }

    fn try_build(&self) -> TemplateResult<QuadMatcher> {
        let slot = |config: &Option<SlotConfig>| -> TemplateResult<SlotSpec> {
            config.as_ref().map_or(Ok(SlotSpec::Wildcard), SlotConfig::build)
        };
        Ok(QuadMatcher::new(
            slot(&self.subject)?,
            slot(&self.predicate)?,
            slot(&self.object)?,
            slot(&self.graph)?,
        )
        .with_negate(self.negate))
    }
}

impl TryFrom<&QuadTemplateConfig> for QuadMatcher {
    type Error = TemplateError;

    fn try_from(config: &QuadTemplateConfig) -> Result<Self, Self::Error> {
        config.build()
    }
}
