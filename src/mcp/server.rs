//! Freezer Door MCP Server Implementation
//!
//! Exposes the calculator tools to assistants over MCP.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::models::CalculateRequest;
use crate::tools::calculate::{self, DiluteRequest};
use crate::tools::status::StatusTracker;
use crate::tools::{cocktails, presets, spirits, ToolError};

/// Freezer Door MCP Service
#[derive(Clone)]
pub struct FreezerDoorService {
    catalog: CatalogStore,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<FreezerDoorService>,
}

impl FreezerDoorService {
    pub fn new(catalog: CatalogStore) -> Self {
        Self {
            catalog,
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetCocktailParams {
    /// Cocktail id, e.g. "martini"
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetSpiritsParams {
    /// Ingredient category, e.g. "gin"
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateRecipeParams {
    pub cocktail: String,
    pub variation: String,
    /// Ingredient category -> brand name
    pub spirits: Option<BTreeMap<String, String>>,
    pub target_volume_ml: f64,
    pub target_abv: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DiluteParams {
    pub spirit_volume_ml: f64,
    pub initial_abv: f64,
    pub target_abv: f64,
}

// ============================================================================
// Helpers
// ============================================================================

fn to_mcp_error(e: ToolError) -> McpError {
    if e.is_client_error() || e.is_not_found() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FreezerDoorService {
    // --- Status ---

    #[tool(description = "Get the current status of the Freezer Door service including build info, catalog source, and process information")]
    fn freezer_door_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status(&self.catalog))
    }

    #[tool(description = "Get step-by-step instructions for batching a freezer door cocktail. Call this first when unsure how to use the calculator tools.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    #[tool(description = "Re-read the recipe and spirit catalogs from disk. The previous catalog stays active if the files fail to load.")]
    fn reload_catalog(&self) -> Result<CallToolResult, McpError> {
        let summary = self
            .catalog
            .reload()
            .map_err(|e| to_mcp_error(e.into()))?;
        json_result(&summary)
    }

    // --- Catalog ---

    #[tool(description = "List all cocktails with their variations, garnish, and strength presets")]
    fn list_cocktails(&self) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog.snapshot();
        json_result(&cocktails::list_cocktails(&catalog))
    }

    #[tool(description = "Get one cocktail with the ingredient categories of each variation")]
    fn get_cocktail(&self, Parameters(p): Parameters<GetCocktailParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog.snapshot();
        let detail = cocktails::get_cocktail(&catalog, &p.id).map_err(to_mcp_error)?;
        json_result(&detail)
    }

    #[tool(description = "List every spirit brand and its ABV, grouped by ingredient category")]
    fn list_spirits(&self) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog.snapshot();
        json_result(&spirits::list_spirits(&catalog))
    }

    #[tool(description = "List the spirit brands available for one ingredient category")]
    fn get_spirits(&self, Parameters(p): Parameters<GetSpiritsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog.snapshot();
        let brands = spirits::get_spirits(&catalog, &p.category).map_err(to_mcp_error)?;
        json_result(&brands)
    }

    #[tool(description = "List the standard target strengths (weak 22%, normal 24%, strong 26%)")]
    fn list_presets(&self) -> Result<CallToolResult, McpError> {
        json_result(&presets::list_presets())
    }

    // --- Calculation ---

    #[tool(description = "Calculate a freezer door batch: spirit volumes and water for a cocktail variation at a target volume (ml) and ABV (%). Unknown brands fall back to the first brand of the category.")]
    fn calculate_recipe(&self, Parameters(p): Parameters<CalculateRecipeParams>) -> Result<CallToolResult, McpError> {
        let request = CalculateRequest {
            cocktail: Some(p.cocktail),
            variation: Some(p.variation),
            spirits: p.spirits,
            target_volume_ml: Some(p.target_volume_ml),
            target_abv: Some(p.target_abv),
        };
        let catalog = self.catalog.snapshot();
        let response = calculate::calculate(&catalog, request).map_err(to_mcp_error)?;
        json_result(&response)
    }

    #[tool(description = "Water to add to an existing spirit volume to bring it down to a target ABV")]
    fn dilute(&self, Parameters(p): Parameters<DiluteParams>) -> Result<CallToolResult, McpError> {
        let request = DiluteRequest {
            spirit_volume_ml: Some(p.spirit_volume_ml),
            initial_abv: Some(p.initial_abv),
            target_abv: Some(p.target_abv),
        };
        let response = calculate::dilute(request).map_err(to_mcp_error)?;
        json_result(&response)
    }
}

#[tool_handler]
impl ServerHandler for FreezerDoorService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "freezer-door".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("The Freezer Door".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "The Freezer Door - batch cocktail dilution calculator. \
                 IMPORTANT: Call calculator_instructions before the first calculation. \
                 Catalog: list_cocktails/get_cocktail, list_spirits/get_spirits, list_presets. \
                 Calculation: calculate_recipe for a full batch, dilute for an existing bottle. \
                 Maintenance: freezer_door_status, reload_catalog."
                    .into(),
            ),
        }
    }
}
