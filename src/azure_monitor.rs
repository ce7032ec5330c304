// ☁️ Azure Monitor URL Builder
//
// Builds the metrics and metric-definition URLs for the cloud-monitoring
// datasource. Nested resource types (more than one '/' in the metric
// definition) split both the definition and the resource name:
//
//   Microsoft.Sql/servers/databases + srv/db
//   → providers/Microsoft.Sql/servers/srv/databases/db

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Path components shared by every Azure Monitor metrics URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePath {
    pub base_url: String,
    pub subscription_id: String,
    pub resource_group: String,
    /// e.g. "Microsoft.Compute/virtualMachines"
    pub metric_definition: String,
    /// e.g. "vm-1", or "parent/child" for nested types
    pub resource_name: String,
    pub api_version: String,
}

impl ResourcePath {
    /// `{base}/{sub}/resourceGroups/{rg}/providers/{type}/{name}`
    fn resource_url(&self) -> Result<String> {
        let prefix = format!(
            "{}/{}/resourceGroups/{}/providers",
            self.base_url, self.subscription_id, self.resource_group
        );

        if self.metric_definition.matches('/').count() <= 1 {
            return Ok(format!(
                "{}/{}/{}",
                prefix, self.metric_definition, self.resource_name
            ));
        }

        let (namespace, service) = self
            .metric_definition
            .rsplit_once('/')
            .ok_or_else(|| Error::InvalidResource(self.metric_definition.clone()))?;

        let mut parts = self.resource_name.split('/');
        let (Some(parent), Some(child)) = (parts.next(), parts.next()) else {
            return Err(Error::InvalidResource(format!(
                "resource name '{}' must be 'parent/child' for '{}'",
                self.resource_name, self.metric_definition
            )));
        };

        Ok(format!(
            "{}/{}/{}/{}/{}",
            prefix, namespace, parent, service, child
        ))
    }
}

/// URL for querying metric values; `filter` is appended verbatim.
pub fn metrics_query_url(path: &ResourcePath, filter: &str) -> Result<String> {
    Ok(format!(
        "{}/providers/microsoft.insights/metrics?api-version={}&{}",
        path.resource_url()?,
        path.api_version,
        filter
    ))
}

/// URL for listing the metric definitions of a resource.
pub fn metric_definitions_url(path: &ResourcePath) -> Result<String> {
    Ok(format!(
        "{}/providers/microsoft.insights/metricdefinitions?api-version={}",
        path.resource_url()?,
        path.api_version
    ))
}
