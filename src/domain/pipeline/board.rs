//! Board-ready grouping of deals by stage.

use serde::Serialize;

use super::Stage;
use crate::domain::crm::Deal;

/// Deals partitioned into the five canonical stage columns.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineBoard {
    /// One column per canonical stage, in board order.
    pub columns: Vec<StageColumn>,
}

/// A single board column.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageColumn {
    pub stage: Stage,
    pub deals: Vec<Deal>,
}

impl PipelineBoard {
    /// Partitions deals into stage columns.
    ///
    /// The partition is stable: each deal keeps its relative order within
    /// its column. Deals whose stage string is not one of the canonical five
    /// land in the `qualified` column rather than being dropped.
    pub fn build(deals: Vec<Deal>) -> Self {
        let mut columns: Vec<StageColumn> = Stage::ALL
            .iter()
            .map(|stage| StageColumn {
                stage: *stage,
                deals: Vec::new(),
            })
            .collect();

        for deal in deals {
            let stage = Stage::parse_or_default(&deal.stage);
            let idx = Stage::ALL
                .iter()
                .position(|s| *s == stage)
                .unwrap_or_default();
            columns[idx].deals.push(deal);
        }

        Self { columns }
    }

    /// Returns the deals in a given stage column.
    pub fn deals_in(&self, stage: Stage) -> &[Deal] {
        self.columns
            .iter()
            .find(|c| c.stage == stage)
            .map(|c| c.deals.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of deals on the board.
    pub fn deal_count(&self) -> usize {
        self.columns.iter().map(|c| c.deals.len()).sum()
    }
}
