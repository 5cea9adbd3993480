//! Cubit-only bodies: cubit and screen (state comes from the shared
//! list-state template).

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

pub fn state(ctx: &TemplateContext) -> String {
    shared::simple_list_state(ctx, &PATHS)
}

pub fn cubit(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import 'package:flutter_bloc/flutter_bloc.dart';
import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '{{SNAKE}}_state.dart';

class {{PASCAL}}Cubit extends Cubit<{{PASCAL}}State> {
  final Get{{PASCAL}}ListUseCase _useCase;

  {{PASCAL}}Cubit(this._useCase) : super(const {{PASCAL}}State());

  Future<void> fetch() async {
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
{{GETIT_IMPORT}}import '../viewmodel/{{SNAKE}}_cubit.dart';
import '../viewmodel/{{SNAKE}}_state.dart';

class {{PASCAL}}Screen extends StatelessWidget {
  const {{PASCAL}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return BlocProvider(
      create: (_) => {{PASCAL}}Cubit(
        {{USECASE_INJECTION}}
      )..fetch(),
      child: BlocBuilder<{{PASCAL}}Cubit, {{PASCAL}}State>(
        builder: (context, state) {
          if (state.loading) return const Center(child: CircularProgressIndicator());
          if (state.error != null) return Center(child: Text(state.error!));

          return ListView.builder(
            itemCount: state.items.length,
            itemBuilder: (context, index) {
              final item = state.items[index];
              return ListTile(title: Text(item.name));
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
