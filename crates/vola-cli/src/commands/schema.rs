use schemars::{JsonSchema, Schema, schema_for};
use serde::Serialize;
use vola_core::entities::{AssociationOwnerStats, GeneralStats, LoginRequest, Plan, RegisterRequest};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::table::TableOptions;
use crate::output::{TableView, output};

#[derive(Serialize)]
#[serde(transparent)]
struct SchemaResponse(Schema);

impl TableView for SchemaResponse {
    fn render_table(&self, _options: TableOptions) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

fn schema_of<T: JsonSchema>() -> Schema {
    schema_for!(T)
}

fn schema(kind: SchemaType) -> Schema {
    match kind {
        SchemaType::Plan => schema_of::<Plan>(),
        SchemaType::LoginRequest => schema_of::<LoginRequest>(),
        SchemaType::RegisterRequest => schema_of::<RegisterRequest>(),
        SchemaType::GeneralStats => schema_of::<GeneralStats>(),
        SchemaType::AssociationStats => schema_of::<AssociationOwnerStats>(),
    }
}

/// Handle `vola schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&SchemaResponse(schema(args.type_name)), flags.format)
}
