//! Generation Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Reject concurrent runs (busy result, not a queue)
//! 2. Resolve the applicable DI/Flutter strategy
//! 3. Materialize core/shared files (once) and the feature tree
//! 4. Patch the shared artifacts to register the feature
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressSink},
        services::{FileTreeMaterializer, SharedArtifactPatcher},
        strategy::StrategyRegistry,
    },
    domain::{FeatureTree, GenerationConfig, Language, TemplateContext},
    error::{ForgeError, ForgeResult},
};

/// Outcome summary of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    /// Files newly created (existing files are never touched).
    pub created_files: usize,
    /// Shared artifacts re-saved by the patcher.
    pub patched_files: usize,
}

/// Main generation service.
///
/// Owns the filesystem port, the strategy registry, and the in-flight
/// guard. One instance serves the whole process; `generate` is one-shot,
/// synchronous and run-to-completion.
pub struct GenerationService {
    filesystem: Box<dyn Filesystem>,
    registry: StrategyRegistry,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path, error or success.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, registry: StrategyRegistry) -> Self {
        Self {
            filesystem,
            registry,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Generate one feature.
    ///
    /// This is the main use case. A second call while one is running is
    /// rejected with [`ApplicationError::GenerationInProgress`]; attempts
    /// are rejected, not queued. Cancellation is not supported: the run
    /// either completes or surfaces an error.
    #[instrument(skip_all, fields(config = %config))]
    pub fn generate(
        &self,
        config: &GenerationConfig,
        project_root: &Path,
        progress: &dyn ProgressSink,
    ) -> ForgeResult<GenerationReport> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            warn!("generation rejected: another run is in flight");
            return Err(ApplicationError::GenerationInProgress.into());
        }
        let _guard = InFlightGuard(&self.in_flight);

        progress.update(0.05, "Preparing generation");
        info!(
            feature = config.feature_name(),
            language = %config.language(),
            di = %config.dependency_injection(),
            "Generation started"
        );

        let ctx = TemplateContext::new(config.name_forms());
        let materializer = FileTreeMaterializer::new(self.filesystem.as_ref());

        let mut report = GenerationReport::default();

        match config.language() {
            Language::Kotlin | Language::Java => {
                let strategy = self
                    .registry
                    .resolve_di(config.language(), config.dependency_injection())
                    .map_err(ForgeError::Domain)?;

                progress.update(0.2, "Ensuring core files");
                let core = strategy.core_tree(&ctx);
                core.validate().map_err(ForgeError::Domain)?;
                report.created_files += materializer.write_tree(project_root, &core)?;

                progress.update(0.5, "Generating feature files");
                let mut feature = strategy.feature_tree(&ctx);
                let di_file = strategy.feature_di_file(&ctx);
                feature.add_file(di_file.path, di_file.content);
                feature.validate().map_err(ForgeError::Domain)?;
                report.created_files += materializer.write_tree(project_root, &feature)?;

                progress.update(0.8, "Updating shared artifacts");
                let patcher = SharedArtifactPatcher::new(self.filesystem.as_ref(), project_root);
                report.patched_files +=
                    patcher.register_feature(config.language(), ctx.names())?;
            }
            Language::Flutter => {
                // validated at construction: state is present for Flutter
                let state = config
                    .state_management()
                    .ok_or(crate::domain::DomainError::MissingStateManagement)?;
                let strategy = self
                    .registry
                    .resolve_flutter(state, config.dependency_injection())
                    .map_err(ForgeError::Domain)?;

                progress.update(0.4, "Generating feature files");
                let tree = strategy.feature_tree(config, &ctx);
                tree.validate().map_err(ForgeError::Domain)?;
                report.created_files += materializer.write_tree(project_root, &tree)?;
            }
        }

        progress.update(1.0, "Finishing");
        info!(
            created = report.created_files,
            patched = report.patched_files,
            "Generation completed"
        );

        Ok(report)
    }

    /// Build the full plan for a configuration without writing anything.
    ///
    /// Used by `--dry-run`: the returned tree lists every file generation
    /// would ensure (shared artifacts patches are not part of the plan;
    /// they depend on the current text of pre-existing files).
    pub fn plan(&self, config: &GenerationConfig) -> ForgeResult<FeatureTree> {
        let ctx = TemplateContext::new(config.name_forms());

        let tree = match config.language() {
            Language::Kotlin | Language::Java => {
                let strategy = self
                    .registry
                    .resolve_di(config.language(), config.dependency_injection())
                    .map_err(ForgeError::Domain)?;

                let mut tree = strategy.core_tree(&ctx);
                tree.extend(strategy.feature_tree(&ctx));
                let di_file = strategy.feature_di_file(&ctx);
                tree.add_file(di_file.path, di_file.content);
                tree
            }
            Language::Flutter => {
                let state = config
                    .state_management()
                    .ok_or(crate::domain::DomainError::MissingStateManagement)?;
                let strategy = self
                    .registry
                    .resolve_flutter(state, config.dependency_injection())
                    .map_err(ForgeError::Domain)?;
                strategy.feature_tree(config, &ctx)
            }
        };

        tree.validate().map_err(ForgeError::Domain)?;
        Ok(tree)
    }

    /// The registry this service resolves against.
    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Whether a generation is currently running.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NullProgress;
    use crate::application::test_support::FakeFilesystem;
    use crate::domain::{DependencyInjection, FileToEnsure, StateManagement};
    use std::path::PathBuf;

    struct StubDi;

    impl crate::application::strategy::DiStrategy for StubDi {
        fn di(&self) -> DependencyInjection {
            DependencyInjection::Hilt
        }
        fn language(&self) -> Language {
            Language::Kotlin
        }
        fn core_tree(&self, _ctx: &TemplateContext) -> FeatureTree {
            FeatureTree::new().with_file(
                "app/src/main/java/core/common/Resource.kt",
                "sealed class Resource".into(),
            )
        }
        fn feature_tree(&self, ctx: &TemplateContext) -> FeatureTree {
            FeatureTree::new().with_file(
                format!(
                    "app/src/main/java/features/{}/domain/model/{}.kt",
                    ctx.names().camel,
                    ctx.names().pascal
                ),
                format!("data class {}", ctx.names().pascal),
            )
        }
        fn feature_di_file(&self, ctx: &TemplateContext) -> FileToEnsure {
            FileToEnsure {
                path: format!(
                    "app/src/main/java/features/{}/di/{}Module.kt",
                    ctx.names().camel,
                    ctx.names().pascal
                )
                .into(),
                content: "object Module".into(),
            }
        }
    }

    fn service(fs: FakeFilesystem) -> GenerationService {
        let mut registry = StrategyRegistry::new();
        registry.register_di(Box::new(StubDi));
        GenerationService::new(Box::new(fs), registry)
    }

    fn kotlin_config() -> GenerationConfig {
        GenerationConfig::new(
            "order history",
            Language::Kotlin,
            DependencyInjection::Hilt,
            None,
        )
        .unwrap()
    }

    #[test]
    fn generate_writes_core_and_feature_trees() {
        let fs = FakeFilesystem::new();
        let svc = service(fs.clone());

        let report = svc
            .generate(&kotlin_config(), Path::new("proj"), &NullProgress)
            .unwrap();

        assert_eq!(report.created_files, 3);
        assert!(fs.exists(&PathBuf::from(
            "proj/app/src/main/java/core/common/Resource.kt"
        )));
        assert!(fs.exists(&PathBuf::from(
            "proj/app/src/main/java/features/orderHistory/domain/model/OrderHistory.kt"
        )));
        assert!(fs.exists(&PathBuf::from(
            "proj/app/src/main/java/features/orderHistory/di/OrderHistoryModule.kt"
        )));
    }

    #[test]
    fn second_run_creates_nothing_new() {
        let fs = FakeFilesystem::new();
        let svc = service(fs.clone());

        svc.generate(&kotlin_config(), Path::new("proj"), &NullProgress)
            .unwrap();
        let report = svc
            .generate(&kotlin_config(), Path::new("proj"), &NullProgress)
            .unwrap();

        assert_eq!(report.created_files, 0);
        assert_eq!(report.patched_files, 0);
    }

    #[test]
    fn unresolved_strategy_is_fatal() {
        let fs = FakeFilesystem::new();
        let svc = service(fs);

        let config =
            GenerationConfig::new("cart", Language::Kotlin, DependencyInjection::Koin, None)
                .unwrap();
        let err = svc
            .generate(&config, Path::new("proj"), &NullProgress)
            .unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Domain(crate::domain::DomainError::UnsupportedDiCombination { .. })
        ));
    }

    #[test]
    fn guard_is_released_after_error() {
        let fs = FakeFilesystem::new();
        let svc = service(fs);

        let bad =
            GenerationConfig::new("cart", Language::Kotlin, DependencyInjection::Koin, None)
                .unwrap();
        let _ = svc.generate(&bad, Path::new("proj"), &NullProgress);

        assert!(!svc.is_busy());
        // A subsequent valid run must not be blocked.
        assert!(
            svc.generate(&kotlin_config(), Path::new("proj"), &NullProgress)
                .is_ok()
        );
    }

    #[test]
    fn flutter_without_registered_strategy_fails() {
        let fs = FakeFilesystem::new();
        let svc = service(fs);

        let config = GenerationConfig::new(
            "cart",
            Language::Flutter,
            DependencyInjection::GetIt,
            Some(StateManagement::Riverpod),
        )
        .unwrap();
        let err = svc
            .generate(&config, Path::new("proj"), &NullProgress)
            .unwrap_err();

        assert!(matches!(
            err,
            ForgeError::Domain(
                crate::domain::DomainError::UnsupportedFlutterCombination { .. }
            )
        ));
    }

    #[test]
    fn plan_lists_every_file_without_writing() {
        let fs = FakeFilesystem::new();
        let svc = service(fs.clone());

        let tree = svc.plan(&kotlin_config()).unwrap();

        assert_eq!(tree.files().count(), 3);
        assert_eq!(fs.file_count(), 0);
    }
}
