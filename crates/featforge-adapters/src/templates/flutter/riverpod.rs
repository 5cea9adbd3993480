//! Riverpod-only bodies: StateNotifier, providers file, consumer screen.

use featforge_core::domain::{DependencyInjection, PathProfile, TemplateContext};

use super::shared;

const PATHS: PathProfile = PathProfile::deep();

pub fn domain_model(ctx: &TemplateContext) -> String {
    shared::domain_model(ctx)
}

pub fn domain_repository(ctx: &TemplateContext) -> String {
    // The repository imports its model as a sibling, unlike the rest of
    // this tree. Generated identifiers must stay stable, so this stays.
    shared::domain_repository(ctx, &PathProfile::flat())
}

pub fn use_case(ctx: &TemplateContext) -> String {
    shared::use_case(ctx, &PATHS)
}

pub fn api_service(ctx: &TemplateContext) -> String {
    shared::api_service(ctx, &PATHS)
}

pub fn repository_impl(ctx: &TemplateContext) -> String {
    shared::repository_impl(ctx, &PATHS)
}

/// State + StateNotifier, one file.
pub fn state_notifier(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import 'package:flutter_riverpod/flutter_riverpod.dart';
import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '../../domain/model/{{SNAKE}}_model.dart';

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

class {{PASCAL}}Notifier extends StateNotifier<{{PASCAL}}State> {
  final Get{{PASCAL}}ListUseCase _useCase;

  {{PASCAL}}Notifier(this._useCase)
      : super(const {{PASCAL}}State());

  Future<void> fetch() async {
    state = state.copyWith(loading: true);

    try {
      final result = await _useCase();
      state = state.copyWith(
        loading: false,
        items: result,
        error: null,
      );
    } catch (e) {
      state = state.copyWith(
        loading: false,
        error: e.toString(),
      );
    }
  }
}
"#,
    )
}

/// The providers file. The use-case lookup inside the provider body is the
/// DI-dependent part.
pub fn providers(ctx: &TemplateContext, di: DependencyInjection) -> String {
    let lookup = match di {
        DependencyInjection::GetIt => {
            format!(
                "final useCase = GetIt.I.get<Get{}ListUseCase>();",
                ctx.names().pascal
            )
        }
        _ => format!(
            "// TODO: provide Get{}ListUseCase manually\n      throw UnimplementedError();",
            ctx.names().pascal
        ),
    };

    ctx.clone()
        .with_var("GETIT_IMPORT", shared::get_it_import(di))
        .with_var("USECASE_LOOKUP", lookup)
        .render(
            r#"import 'package:flutter_riverpod/flutter_riverpod.dart';
{{GETIT_IMPORT}}import '../../data/remote/{{SNAKE}}_api_service.dart';
import '../../data/repository/{{SNAKE}}_repository_impl.dart';
import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '{{SNAKE}}_state_notifier.dart';

final {{SNAKE}}NotifierProvider =
    StateNotifierProvider<{{PASCAL}}Notifier, {{PASCAL}}State>(
  (ref) {
    {{USECASE_LOOKUP}}
    return {{PASCAL}}Notifier(useCase);
  },
);
"#,
        )
}

pub fn screen(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import 'package:flutter/material.dart';
import 'package:flutter_riverpod/flutter_riverpod.dart';
import '../viewmodel/{{SNAKE}}_providers.dart';

class {{PASCAL}}Screen extends ConsumerWidget {
  const {{PASCAL}}Screen({super.key});

  @override
  Widget build(BuildContext context, WidgetRef ref) {
    final state = ref.watch({{SNAKE}}NotifierProvider);

    if (state.loading) {
      return const Center(child: CircularProgressIndicator());
    }

    if (state.error != null) {
      return Center(child: Text(state.error!));
    }

    return ListView.builder(
      itemCount: state.items.length,
      itemBuilder: (context, index) {
        final item = state.items[index];
        return ListTile(
          title: Text(item.name),
        );
      },
    );
  }
}
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    fn ctx() -> TemplateContext {
        TemplateContext::new(NameForms::derive("cart"))
    }

    #[test]
    fn providers_with_getit_contains_lookup() {
        let body = providers(&ctx(), DependencyInjection::GetIt);
        assert!(body.contains("import 'package:get_it/get_it.dart';"));
        assert!(body.contains("GetIt.I.get<GetCartListUseCase>();"));
        assert!(!body.contains("UnimplementedError"));
    }

    #[test]
    fn providers_without_di_contains_stub_and_no_getit() {
        let body = providers(&ctx(), DependencyInjection::None);
        assert!(body.contains("throw UnimplementedError();"));
        assert!(body.contains("// TODO: provide GetCartListUseCase manually"));
        assert!(!body.contains("GetIt"));
        assert!(!body.contains("get_it"));
    }

    #[test]
    fn notifier_provider_is_keyed_by_snake_name() {
        let body = providers(&ctx(), DependencyInjection::GetIt);
        assert!(body.contains("final cartNotifierProvider ="));
    }

    #[test]
    fn screen_watches_the_provider() {
        let body = screen(&ctx());
        assert!(body.contains("ref.watch(cartNotifierProvider)"));
    }
}
