//! Bloc-only bodies: event, state, bloc and screen files.

use featforge_core::domain::{DependencyInjection, PathProfile, TemplateContext};

use super::shared;

const PATHS: PathProfile = PathProfile::deep();

pub fn domain_model(ctx: &TemplateContext) -> String {
    shared::domain_model(ctx)
}

pub fn domain_repository(ctx: &TemplateContext) -> String {
    shared::domain_repository(ctx, &PATHS)
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

pub fn event(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"abstract class {{PASCAL}}Event {
  const {{PASCAL}}Event();
}

class {{PASCAL}}FetchRequested extends {{PASCAL}}Event {
  const {{PASCAL}}FetchRequested();
}
"#,
    )
}

pub fn state(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import '../../domain/model/{{SNAKE}}_model.dart';

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

pub fn bloc(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import 'package:flutter_bloc/flutter_bloc.dart';
import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '{{SNAKE}}_event.dart';
import '{{SNAKE}}_state.dart';

class {{PASCAL}}Bloc extends Bloc<{{PASCAL}}Event, {{PASCAL}}State> {
  final Get{{PASCAL}}ListUseCase _useCase;

  {{PASCAL}}Bloc(this._useCase) : super(const {{PASCAL}}State()) {
    on<{{PASCAL}}FetchRequested>(_onFetch);
  }

  Future<void> _onFetch(
    {{PASCAL}}FetchRequested event,
    Emitter<{{PASCAL}}State> emit,
  ) async {
    emit(state.copyWith(loading: true, error: null));

    try {
      final result = await _useCase();
      emit(state.copyWith(loading: false, items: result, error: null));
    } catch (e) {
      emit(state.copyWith(loading: false, error: e.toString()));
    }
  }
}
"#,
    )
}

pub fn screen(ctx: &TemplateContext, di: DependencyInjection) -> String {
    ctx.clone()
        .with_var("GETIT_IMPORT", shared::get_it_import(di))
        .with_var(
            "USECASE_INJECTION",
            shared::use_case_injection(&ctx.names().pascal, di),
        )
        .render(
            r#"import 'package:flutter/material.dart';
import 'package:flutter_bloc/flutter_bloc.dart';
{{GETIT_IMPORT}}import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '../viewmodel/{{SNAKE}}_bloc.dart';
import '../viewmodel/{{SNAKE}}_event.dart';
import '../viewmodel/{{SNAKE}}_state.dart';

class {{PASCAL}}Screen extends StatelessWidget {
  const {{PASCAL}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (_) => {{PASCAL}}Bloc(
        {{USECASE_INJECTION}}
      )..add(const {{PASCAL}}FetchRequested()),
      child: BlocBuilder<{{PASCAL}}Bloc, {{PASCAL}}State>(
        builder: (context, state) {
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
        },
      ),
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
    fn bloc_registers_fetch_handler() {
        let body = bloc(&ctx());
        assert!(body.contains("on<CartFetchRequested>(_onFetch);"));
    }

    #[test]
    fn screen_adds_initial_fetch_event() {
        let body = screen(&ctx(), DependencyInjection::GetIt);
        assert!(body.contains("..add(const CartFetchRequested())"));
        assert!(body.contains("GetIt.I.get<GetCartListUseCase>(),"));
    }

    #[test]
    fn event_file_has_no_imports() {
        let body = event(&ctx());
        assert!(!body.contains("import"));
    }
}
