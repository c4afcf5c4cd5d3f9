//! Orchestrator Use Case
//!
//! Deploy is fail-fast in declared order; purge is best-effort in reverse
//! order. Neither retries nor rolls back.

use std::sync::Arc;

use crate::domain::entities::WorkloadConfig;
use crate::domain::ports::{Deployer, DeployerFactory, Reporter, WaitGuard};
use crate::error::{BerthError, BerthResult};

use super::options::{DeployOptions, PurgeOptions};
use super::result::StatusEntry;

/// Drives batch operations over an ordered list of workloads.
///
/// Parameterized by the [`DeployerFactory`] port so tests can inject
/// recording deployers.
pub struct Orchestrator<F>
where
    F: DeployerFactory,
{
    workloads: Vec<WorkloadConfig>,
    factory: F,
    reporter: Arc<dyn Reporter>,
}

impl<F> Orchestrator<F>
where
    F: DeployerFactory,
{
    pub fn new(workloads: Vec<WorkloadConfig>, factory: F, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            workloads,
            factory,
            reporter,
        }
    }

    pub fn workloads(&self) -> &[WorkloadConfig] {
        &self.workloads
    }

    /// Build the deployer for one workload, classifying the failure
    fn deployer_for(&self, workload: &WorkloadConfig) -> BerthResult<F::Deployer> {
        let method = workload
            .method()
            .map_err(|e| BerthError::configuration(&workload.name, e))?;
        self.factory
            .create(workload, method)
            .map_err(|e| BerthError::construction(&workload.name, e))
    }

    /// Deploy every workload in declared order, stopping at the first failure.
    ///
    /// Workloads before the failing one stay deployed.
    pub fn deploy_all(&self, options: &DeployOptions) -> BerthResult<()> {
        for workload in &self.workloads {
            let method = workload
                .method()
                .map_err(|e| BerthError::configuration(&workload.name, e))?;
            self.reporter
                .info(&format!("Deploying {} with {}", workload.name, method.kind()));

            let deployer = self
                .factory
                .create(workload, method)
                .map_err(|e| BerthError::construction(&workload.name, e))?;

            deployer
                .deploy(&options.generated, options.is_dev, options.force_deploy)
                .map_err(|e| BerthError::execution(&workload.name, e))?;

            self.reporter
                .done(&format!("Finished deploying {}", workload.name));
        }
        Ok(())
    }

    /// Delete the selected workloads in reverse declared order.
    ///
    /// Failures are reported as warnings and never stop the batch. Names in
    /// the filter that match no workload are ignored.
    pub fn purge(&self, options: &PurgeOptions) {
        for workload in self
            .workloads
            .iter()
            .rev()
            .filter(|w| options.selects(&w.name))
        {
            let deployer = match self.deployer_for(workload) {
                Ok(deployer) => deployer,
                Err(e) => {
                    self.reporter
                        .warn(&format!("Unable to delete deployment {}: {}", workload.name, e));
                    continue;
                }
            };

            let deleted = {
                let _wait = WaitGuard::start(
                    self.reporter.as_ref(),
                    &format!("Deleting deployment {}", workload.name),
                );
                deployer.delete()
            };

            match deleted {
                Ok(()) => self
                    .reporter
                    .done(&format!("Successfully deleted deployment {}", workload.name)),
                Err(e) => self.reporter.warn(&format!(
                    "Error deleting deployment {}: {}",
                    workload.name, e
                )),
            }
        }
    }

    /// Status of every workload in declared order
    pub fn status(&self) -> Vec<StatusEntry> {
        self.workloads
            .iter()
            .map(|workload| StatusEntry {
                name: workload.name.clone(),
                result: self.deployer_for(workload).and_then(|deployer| {
                    deployer
                        .status()
                        .map_err(|e| BerthError::execution(&workload.name, e))
                }),
            })
            .collect()
    }
}
