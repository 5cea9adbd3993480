//! Provider-only bodies: ChangeNotifier view model and its screen.
//!
//! Provider feature trees historically keep the flat import layout.

use featforge_core::domain::{DependencyInjection, PathProfile, TemplateContext};

use super::shared;

const PATHS: PathProfile = PathProfile::flat();

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

pub fn view_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"import 'package:flutter/foundation.dart';
import '../../domain/usecase/get_{{SNAKE}}_list_usecase.dart';
import '../../domain/model/{{SNAKE}}_model.dart';

class {{PASCAL}}ViewModel extends ChangeNotifier {
  final Get{{PASCAL}}ListUseCase _useCase;

  {{PASCAL}}ViewModel(this._useCase);

  bool loading = false;
  String? error;
  List<{{PASCAL}}> items = [];

  Future<void> fetch() async {
    loading = true;
    notifyListeners();

    try {
      final result = await _useCase();
      items = result;
      error = null;
    } catch (e) {
      error = e.toString();
    }

    loading = false;
    notifyListeners();
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
import 'package:provider/provider.dart';
{{GETIT_IMPORT}}import '../viewmodel/{{SNAKE}}_view_model.dart';

class {{PASCAL}}Screen extends StatelessWidget {
  const {{PASCAL}}Screen({super.key});

  @override
  Widget build(BuildContext context) {
    return ChangeNotifierProvider(
      create: (_) => {{PASCAL}}ViewModel(
        {{USECASE_INJECTION}}
      )..fetch(),
      child: Consumer<{{PASCAL}}ViewModel>(
        builder: (context, vm, _) {
          if (vm.loading) {
            return const Center(child: CircularProgressIndicator());
          }

          if (vm.error != null) {
            return Center(child: Text(vm.error!));
          }

          return ListView.builder(
            itemCount: vm.items.length,
            itemBuilder: (context, index) {
              final item = vm.items[index];
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
