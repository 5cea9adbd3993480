//! Bodies shared by every Flutter state-management variant.
//!
//! Only the import spellings differ between layouts, so each function takes
//! the active [`PathProfile`] and injects the computed import strings as
//! extra context variables before rendering.

use featforge_core::domain::{DependencyInjection, PathProfile, TemplateContext};

pub fn domain_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"class {{PASCAL}} {
  final int id;
  final String name;

  const {{PASCAL}}({
    required this.id,
    required this.name,
  });
}
"#,
    )
}

pub fn domain_repository(ctx: &TemplateContext, paths: &PathProfile) -> String {
    let snake = &ctx.names().snake;
    ctx.clone()
        .with_var("MODEL_IMPORT", (paths.domain_model_import)(snake))
        .render(
            r#"import '{{MODEL_IMPORT}}';

abstract class {{PASCAL}}Repository {
  Future<List<{{PASCAL}}>> get{{PASCAL}}List();
}
"#,
        )
}

pub fn use_case(ctx: &TemplateContext, paths: &PathProfile) -> String {
    let snake = &ctx.names().snake;
    ctx.clone()
        .with_var("REPO_IMPORT", (paths.use_case_repo_import)(snake))
        .with_var("MODEL_IMPORT", (paths.use_case_model_import)(snake))
        .render(
            r#"import '{{REPO_IMPORT}}';
import '{{MODEL_IMPORT}}';

class Get{{PASCAL}}ListUseCase {
  final {{PASCAL}}Repository repository;

  Get{{PASCAL}}ListUseCase(this.repository);

  Future<List<{{PASCAL}}>> call() {
    return repository.get{{PASCAL}}List();
  }
}
"#,
        )
}

pub fn api_service(ctx: &TemplateContext, paths: &PathProfile) -> String {
    let snake = &ctx.names().snake;
    ctx.clone()
        .with_var("MODEL_IMPORT", (paths.data_model_import)(snake))
        .render(
            r#"import 'package:dio/dio.dart';
import '{{MODEL_IMPORT}}';

class {{PASCAL}}ApiService {
  final Dio _dio;

  {{PASCAL}}ApiService(this._dio);

  Future<List<{{PASCAL}}>> get{{PASCAL}}List() async {
    final response = await _dio.get('/{{SNAKE}}');
    // TODO: parse response
    return [];
  }
}
"#,
        )
}

pub fn repository_impl(ctx: &TemplateContext, paths: &PathProfile) -> String {
    let snake = &ctx.names().snake;
    ctx.clone()
        .with_var("REPO_IMPORT", (paths.data_repo_import)(snake))
        .with_var("MODEL_IMPORT", (paths.data_model_import)(snake))
        .with_var("REMOTE_IMPORT", (paths.data_remote_import)(snake))
        .render(
            r#"import '{{REPO_IMPORT}}';
import '{{MODEL_IMPORT}}';
import '{{REMOTE_IMPORT}}';

class {{PASCAL}}RepositoryImpl implements {{PASCAL}}Repository {
  final {{PASCAL}}ApiService api;

  {{PASCAL}}RepositoryImpl(this.api);

  @override
  Future<List<{{PASCAL}}>> get{{PASCAL}}List() async {
    return api.get{{PASCAL}}List();
  }
}
"#,
        )
}

/// Immutable list-state holder with `copyWith`, used by the Cubit and
/// Riverpod variants.
pub fn simple_list_state(ctx: &TemplateContext, paths: &PathProfile) -> String {
    let snake = &ctx.names().snake;
    ctx.clone()
        .with_var("MODEL_IMPORT", (paths.domain_model_import)(snake))
        .render(
            r#"import '{{MODEL_IMPORT}}';

class {{PASCAL}}State {
  final bool loading;
  final String? error;
  final List<{{PASCAL}}> items;

  const {{PASCAL}}State({
    this.loading = false,
    this.error,
    this.items = const [],
  });

  {{PASCAL}}State copyWith({
    bool? loading,
    String? error,
    List<{{PASCAL}}>? items,
  }) {
    return {{PASCAL}}State(
      loading: loading ?? this.loading,
      error: error,
      items: items ?? this.items,
    );
  }
}
"#,
        )
}

// ---- Shared DI snippets ----
//
// Keyed purely on the DI enum value so every state-management variant gets
// the same wiring text.

/// The constructor argument that supplies the use case: a GetIt lookup, or
/// a "provide manually" stub when no DI was selected.
pub fn use_case_injection(pascal: &str, di: DependencyInjection) -> String {
    let use_case_type = format!("Get{pascal}ListUseCase");
    match di {
        DependencyInjection::GetIt => format!("GetIt.I.get<{use_case_type}>(),"),
        _ => format!(
            "// TODO: provide {use_case_type} here (no DI selected)\n              throw UnimplementedError(),"
        ),
    }
}

/// The GetIt import line, or nothing when no DI was selected.
pub fn get_it_import(di: DependencyInjection) -> &'static str {
    if di == DependencyInjection::GetIt {
        "import 'package:get_it/get_it.dart';\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    fn ctx() -> TemplateContext {
        TemplateContext::new(NameForms::derive("cart"))
    }

    #[test]
    fn deep_profile_repository_impl_climbs_into_domain() {
        let body = repository_impl(&ctx(), &PathProfile::deep());
        assert!(body.contains("import '../../domain/repository/cart_repository.dart';"));
        assert!(body.contains("import '../remote/cart_api_service.dart';"));
    }

    #[test]
    fn flat_profile_repository_impl_uses_siblings() {
        let body = repository_impl(&ctx(), &PathProfile::flat());
        assert!(body.contains("import 'cart_repository.dart';"));
        assert!(!body.contains("../"));
    }

    #[test]
    fn use_case_injection_switches_on_di() {
        let with_getit = use_case_injection("Cart", DependencyInjection::GetIt);
        assert_eq!(with_getit, "GetIt.I.get<GetCartListUseCase>(),");

        let without = use_case_injection("Cart", DependencyInjection::None);
        assert!(without.contains("throw UnimplementedError()"));
        assert!(!without.contains("GetIt"));
    }

    #[test]
    fn get_it_import_only_for_getit() {
        assert!(get_it_import(DependencyInjection::GetIt).contains("get_it"));
        assert_eq!(get_it_import(DependencyInjection::None), "");
    }

    #[test]
    fn api_service_hits_snake_endpoint() {
        let body = api_service(&ctx(), &PathProfile::deep());
        assert!(body.contains("_dio.get('/cart')"));
    }
}
