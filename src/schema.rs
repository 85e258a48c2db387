//! Declared output schemas and team projection
//!
//! The caller decides which team attributes it wants, which of them are
//! required, and whether the result is keyed by team id or kept in
//! directory order. Projection is pure: no network access, no state.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::client::TeamRecord;
use crate::error::{ConfigError, Result, SchemaError};

/// Selectable team attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamField {
    Id,
    Name,
    Department,
    Domain,
    CloudOrg,
}

impl TeamField {
    /// Every attribute the directory can supply, in display order.
    pub const ALL: [TeamField; 5] = [
        TeamField::Id,
        TeamField::Name,
        TeamField::Department,
        TeamField::Domain,
        TeamField::CloudOrg,
    ];

    /// Attribute name as it appears in output and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TeamField::Id => "id",
            TeamField::Name => "name",
            TeamField::Department => "department",
            TeamField::Domain => "domain",
            TeamField::CloudOrg => "cloud_org",
        }
    }
}

impl FromStr for TeamField {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "id" => Ok(TeamField::Id),
            "name" => Ok(TeamField::Name),
            "department" => Ok(TeamField::Department),
            "domain" => Ok(TeamField::Domain),
            "cloud_org" => Ok(TeamField::CloudOrg),
            other => Err(ConfigError::UnknownField(other.to_string())),
        }
    }
}

/// One attribute in a declared schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: TeamField,
    pub required: bool,
}

/// Shape of the projected collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputShape {
    /// Map keyed by team id; on duplicate ids the last record wins.
    Keyed,
    /// Teams in directory order; duplicate ids are preserved.
    Sequence,
}

/// A caller-declared output schema.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    shape: OutputShape,
    fields: Vec<FieldSpec>,
}

/// Attributes of one projected team. Optional attributes the directory did
/// not supply are present with a `None` value, which serializes to `null`.
pub type AttributeMap = BTreeMap<&'static str, Option<String>>;

/// A projected team collection in the shape the schema declared.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OutputCollection {
    Keyed(BTreeMap<String, AttributeMap>),
    Sequence(Vec<AttributeMap>),
}

impl OutputCollection {
    pub fn len(&self) -> usize {
        match self {
            OutputCollection::Keyed(map) => map.len(),
            OutputCollection::Sequence(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutputSchema {
    pub fn new(shape: OutputShape, fields: Vec<FieldSpec>) -> Self {
        Self { shape, fields }
    }

    /// Schema projecting every attribute, all optional.
    pub fn all_fields(shape: OutputShape) -> Self {
        let fields = TeamField::ALL
            .into_iter()
            .map(|field| FieldSpec {
                field,
                required: false,
            })
            .collect();
        Self::new(shape, fields)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Project fetched teams into the declared output shape.
    ///
    /// Exactly the schema's fields appear in the result. A required
    /// attribute missing from any record fails the whole projection.
    pub fn project(&self, teams: Vec<TeamRecord>) -> Result<OutputCollection> {
        match self.shape {
            OutputShape::Keyed => {
                let mut keyed = BTreeMap::new();
                for team in &teams {
                    keyed.insert(team.id.clone(), self.attributes(team)?);
                }
                Ok(OutputCollection::Keyed(keyed))
            }
            OutputShape::Sequence => {
                let rows = teams
                    .iter()
                    .map(|team| self.attributes(team))
                    .collect::<Result<Vec<_>>>()?;
                Ok(OutputCollection::Sequence(rows))
            }
        }
    }

    fn attributes(&self, team: &TeamRecord) -> Result<AttributeMap> {
        let mut attrs = AttributeMap::new();

        for spec in &self.fields {
            let value = match spec.field {
                TeamField::Id => Some(team.id.clone()),
                TeamField::Name => team.name.clone(),
                TeamField::Department => team.department.clone(),
                TeamField::Domain => team.domain.clone(),
                TeamField::CloudOrg => team.cloud_org.clone(),
            };

            if spec.required && value.is_none() {
                return Err(SchemaError::MissingAttribute {
                    team_id: team.id.clone(),
                    field: spec.field.name(),
                }
                .into());
            }

            attrs.insert(spec.field.name(), value);
        }

        Ok(attrs)
    }
}
