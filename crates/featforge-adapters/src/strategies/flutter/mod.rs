//! Flutter state-management strategies.
//!
//! Every strategy emits the same domain/data slice (rendered through its
//! own catalog) and differs only in the presentation files. All of them
//! accept GetIt or no DI.

pub mod bloc;
pub mod cubit;
pub mod provider;
pub mod riverpod;

use std::path::PathBuf;

use featforge_core::{
    application::layout,
    domain::{DependencyInjection, FeatureTree, TemplateContext},
};

pub use bloc::BlocFlutterStrategy;
pub use cubit::CubitFlutterStrategy;
pub use provider::ProviderFlutterStrategy;
pub use riverpod::RiverpodFlutterStrategy;

pub(crate) const SUPPORTED_DI: &[DependencyInjection] =
    &[DependencyInjection::GetIt, DependencyInjection::None];

/// `lib/features/<snake>/`
pub(crate) fn feature_root(ctx: &TemplateContext) -> PathBuf {
    PathBuf::from(layout::FLUTTER_LIB_ROOT)
        .join("features")
        .join(&ctx.names().snake)
}

/// The directory skeleton shared by every variant.
pub(crate) fn feature_dirs(tree: &mut FeatureTree, ctx: &TemplateContext) {
    let base = feature_root(ctx);
    for dir in [
        "data/remote",
        "data/repository",
        "domain/model",
        "domain/repository",
        "domain/usecase",
        "presentation/ui",
        "presentation/viewmodel",
    ] {
        tree.add_dir(base.join(dir));
    }
}
