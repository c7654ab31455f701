//! Tabular-aggregation inputs for the json-transform functions

use crate::index::PayloadIndex;
use crate::random::RandomSource;
use crate::seed::{effective_seed, pick, spread};
use serde::{Deserialize, Serialize};

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// All variants in canonical order; selection indexes into this.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum!(
    /// Aggregation applied per group
    Operation { Count => "count", Sum => "sum", Avg => "avg", Min => "min", Max => "max" }
);

wire_enum!(
    /// Row field used as the grouping key
    GroupField { Dept => "dept", Region => "region", Tier => "tier" }
);

wire_enum!(
    /// Numeric row field aggregated by non-count operations
    ValueField { Salary => "salary", Age => "age", Score => "score" }
);

wire_enum!(
    Department {
        Eng => "eng",
        Sales => "sales",
        Hr => "hr",
        Marketing => "marketing",
        Finance => "finance",
        Ops => "ops",
    }
);

wire_enum!(
    Region { Emea => "emea", Na => "na", Apac => "apac", Latam => "latam" }
);

wire_enum!(
    Tier { Junior => "junior", Mid => "mid", Senior => "senior" }
);

/// One synthetic employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub dept: Department,
    pub region: Region,
    pub tier: Tier,
    pub salary: u64,
    pub age: u64,
    pub score: u64,
}

/// Input of a json-transform invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTransformInput {
    /// Between 8 and 31 rows
    pub data: Vec<Row>,
    pub group_by: GroupField,
    pub operation: Operation,
    /// Present iff `operation` is not `count`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_field: Option<ValueField>,
}

/// Build the json-transform input for `index`, drawing a fresh seed from
/// `rng` when the index is unpooled.
pub fn build_json_transform_input<R>(index: PayloadIndex, rng: &mut R) -> JsonTransformInput
where
    R: RandomSource + ?Sized,
{
    json_transform_from_seed(effective_seed(index, rng))
}

/// Deterministic json-transform input for a seed.
pub fn json_transform_from_seed(seed: u64) -> JsonTransformInput {
    let operation = *pick(Operation::ALL, seed, 0);
    let group_by = *pick(GroupField::ALL, seed, 3);
    let value_field = *pick(ValueField::ALL, seed, 11);
    let rows = 8 + seed % 24;

    let data = (0..rows)
        .map(|i| Row {
            dept: *pick(Department::ALL, seed, i + 1),
            region: *pick(Region::ALL, seed, i + 5),
            tier: *pick(Tier::ALL, seed, i + 9),
            salary: 40_000 + spread(seed, 37, i, 173, 90_000),
            age: 22 + spread(seed, 11, i, 5, 35),
            score: 50 + spread(seed, 13, i, 7, 51),
        })
        .collect();

    JsonTransformInput {
        data,
        group_by,
        operation,
        value_field: (operation != Operation::Count).then_some(value_field),
    }
}
