//! Java feature-slice file bodies.

use featforge_core::domain::TemplateContext;

pub fn domain_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.model;

// TODO: adjust the fields to the real domain
public class {{PASCAL}} {

    private final long id;
    private final String name;

    public {{PASCAL}}(long id, String name) {
        this.id = id;
        this.name = name;
    }

    public long getId() {
        return id;
    }

    public String getName() {
        return name;
    }
}
"#,
    )
}

pub fn domain_repository(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.repository;

import java.util.List;

import core.common.Resource;
import features.{{LOWER}}.domain.model.{{PASCAL}};

public interface {{PASCAL}}Repository {

    Resource<List<{{PASCAL}}>> get{{PASCAL}}List();
}
"#,
    )
}

pub fn use_case(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.usecase;

import java.util.List;

import core.common.Resource;
import features.{{LOWER}}.domain.model.{{PASCAL}};
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository;

public class Get{{PASCAL}}ListUseCase {

    private final {{PASCAL}}Repository repository;

    public Get{{PASCAL}}ListUseCase({{PASCAL}}Repository repository) {
        this.repository = repository;
    }

    public Resource<List<{{PASCAL}}>> execute() {
        return repository.get{{PASCAL}}List();
    }
}
"#,
    )
}

pub fn dto(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.remote.dto;

// TODO: adjust the fields to match the API response
public class {{PASCAL}}Dto {

    private long id;
    private String name;

    public long getId() {
        return id;
    }

    public void setId(long id) {
        this.id = id;
    }

    public String getName() {
        return name;
    }

    public void setName(String name) {
        this.name = name;
    }
}
"#,
    )
}

pub fn api_service(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.remote;

import java.util.List;

import features.{{LOWER}}.data.remote.dto.{{PASCAL}}Dto;
import retrofit2.Call;
import retrofit2.http.GET;

public interface {{PASCAL}}ApiService {

    @GET("api/{{LOWER}}")
    Call<List<{{PASCAL}}Dto>> get{{PASCAL}}List();
}
"#,
    )
}

pub fn entity(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.local.entity;

import androidx.room.Entity;
import androidx.room.PrimaryKey;

@Entity(tableName = "{{LOWER}}_table")
public class {{PASCAL}}Entity {

    @PrimaryKey(autoGenerate = true)
    private long id;

    private String name;

    public {{PASCAL}}Entity(String name) {
        this.name = name;
    }

    public long getId() {
        return id;
    }

    public void setId(long id) {
        this.id = id;
    }

    public String getName() {
        return name;
    }

    public void setName(String name) {
        this.name = name;
    }
}
"#,
    )
}

pub fn dao(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.local.dao;

import java.util.List;

import androidx.room.Dao;
import androidx.room.Insert;
import androidx.room.OnConflictStrategy;
import androidx.room.Query;
import features.{{LOWER}}.data.local.entity.{{PASCAL}}Entity;

@Dao
public interface {{PASCAL}}Dao {

    @Query("SELECT * FROM {{LOWER}}_table")
    List<{{PASCAL}}Entity> getAll();

    @Insert(onConflict = OnConflictStrategy.REPLACE)
    void insertAll(List<{{PASCAL}}Entity> items);

    @Query("DELETE FROM {{LOWER}}_table")
    void clear();
}
"#,
    )
}

pub fn repository_impl(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.repository;

import java.io.IOException;
import java.util.ArrayList;
import java.util.List;

import core.common.ErrorHandler;
import core.common.Resource;
import core.database.AppDatabase;
import features.{{LOWER}}.data.local.dao.{{PASCAL}}Dao;
import features.{{LOWER}}.data.local.entity.{{PASCAL}}Entity;
import features.{{LOWER}}.data.remote.{{PASCAL}}ApiService;
import features.{{LOWER}}.data.remote.dto.{{PASCAL}}Dto;
import features.{{LOWER}}.domain.model.{{PASCAL}};
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository;
import retrofit2.Response;

public class {{PASCAL}}RepositoryImpl implements {{PASCAL}}Repository {

    private final AppDatabase db;
    private final {{PASCAL}}ApiService api;

    public {{PASCAL}}RepositoryImpl(AppDatabase db,
                                    {{PASCAL}}ApiService api) {
        this.db = db;
        this.api = api;
    }

    @Override
    public Resource<List<{{PASCAL}}>> get{{PASCAL}}List() {
        try {
            {{PASCAL}}Dao dao = db.{{CAMEL}}Dao();

            // Load from network
            Response<List<{{PASCAL}}Dto>> response = api.get{{PASCAL}}List().execute();
            if (response.isSuccessful() && response.body() != null) {
                List<{{PASCAL}}Dto> dtos = response.body();

                List<{{PASCAL}}Entity> entities = new ArrayList<>();
                for ({{PASCAL}}Dto dto : dtos) {
                    {{PASCAL}}Entity entity =
                            new {{PASCAL}}Entity(dto.getName());
                    entities.add(entity);
                }

                dao.clear();
                dao.insertAll(entities);
            }

            List<{{PASCAL}}Entity> local = dao.getAll();
            List<{{PASCAL}}> domainList = new ArrayList<>();
            for ({{PASCAL}}Entity entity : local) {
                {{PASCAL}} item = new {{PASCAL}}(
                        entity.getId(),
                        entity.getName()
                );
                domainList.add(item);
            }

            return new Resource.Success<>(domainList);

        } catch (IOException e) {
            return new Resource.Error(
                    ErrorHandler.getErrorMessage(e),
                    e
            );
        } catch (Throwable t) {
            return new Resource.Error(
                    ErrorHandler.getErrorMessage(t),
                    t
            );
        }
    }
}
"#,
    )
}

pub fn ui_state(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.state;

import java.util.List;

import features.{{LOWER}}.domain.model.{{PASCAL}};

public class {{PASCAL}}UiState {

    private final boolean loading;
    private final String errorMessage;
    private final List<{{PASCAL}}> items;

    public {{PASCAL}}UiState(boolean loading,
                             String errorMessage,
                             List<{{PASCAL}}> items) {
        this.loading = loading;
        this.errorMessage = errorMessage;
        this.items = items;
    }

    public static {{PASCAL}}UiState loading() {
        return new {{PASCAL}}UiState(true, null, null);
    }

    public static {{PASCAL}}UiState error(String message) {
        return new {{PASCAL}}UiState(false, message, null);
    }

    public static {{PASCAL}}UiState success(List<{{PASCAL}}> items) {
        return new {{PASCAL}}UiState(false, null, items);
    }

    public boolean isLoading() {
        return loading;
    }

    public String getErrorMessage() {
        return errorMessage;
    }

    public List<{{PASCAL}}> getItems() {
        return items;
    }
}
"#,
    )
}

pub fn view_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.viewmodel;

import androidx.lifecycle.LiveData;
import androidx.lifecycle.MutableLiveData;
import androidx.lifecycle.ViewModel;

import java.util.List;

import core.common.Resource;
import features.{{LOWER}}.domain.model.{{PASCAL}};
import features.{{LOWER}}.domain.usecase.Get{{PASCAL}}ListUseCase;
import features.{{LOWER}}.presentation.state.{{PASCAL}}UiState;

public class {{PASCAL}}ViewModel extends ViewModel {

    private final Get{{PASCAL}}ListUseCase get{{PASCAL}}ListUseCase;

    private final MutableLiveData<{{PASCAL}}UiState> _uiState =
            new MutableLiveData<>();
    public LiveData<{{PASCAL}}UiState> uiState = _uiState;

    public {{PASCAL}}ViewModel(Get{{PASCAL}}ListUseCase get{{PASCAL}}ListUseCase) {
        this.get{{PASCAL}}ListUseCase = get{{PASCAL}}ListUseCase;
        loadData();
    }

    public void loadData() {
        _uiState.setValue({{PASCAL}}UiState.loading());

        // Synchronous for now; switch to an Executor when wiring real I/O.
        Resource<List<{{PASCAL}}>> result = get{{PASCAL}}ListUseCase.execute();

        if (result instanceof Resource.Success) {
            List<{{PASCAL}}> data = ((Resource.Success<List<{{PASCAL}}>>) result).getData();
            _uiState.setValue({{PASCAL}}UiState.success(data));
        } else if (result instanceof Resource.Error) {
            String msg = ((Resource.Error) result).getMessage();
            _uiState.setValue({{PASCAL}}UiState.error(msg));
        }
    }
}
"#,
    )
}

pub fn fragment(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.ui;

import android.os.Bundle;
import android.view.LayoutInflater;
import android.view.View;
import android.view.ViewGroup;

import androidx.annotation.NonNull;
import androidx.annotation.Nullable;
import androidx.lifecycle.Observer;
import androidx.lifecycle.ViewModelProvider;

import core.common.BaseFragment;
import features.{{LOWER}}.presentation.state.{{PASCAL}}UiState;
import features.{{LOWER}}.presentation.viewmodel.{{PASCAL}}ViewModel;
import Fragment{{PASCAL}}Binding; // TODO: fix the ViewBinding package

public class {{PASCAL}}Fragment extends BaseFragment<Fragment{{PASCAL}}Binding> {

    private {{PASCAL}}ViewModel viewModel;

    @Override
    protected Fragment{{PASCAL}}Binding inflateBinding(@NonNull LayoutInflater inflater,
                                                       @Nullable ViewGroup container,
                                                       boolean attachToParent) {
        return Fragment{{PASCAL}}Binding.inflate(inflater, container, attachToParent);
    }

    @Override
    public void onViewCreated(@NonNull View view, @Nullable Bundle savedInstanceState) {
        super.onViewCreated(view, savedInstanceState);

        viewModel = new ViewModelProvider(this).get({{PASCAL}}ViewModel.class);

        viewModel.uiState.observe(
                getViewLifecycleOwner(),
                new Observer<{{PASCAL}}UiState>() {
                    @Override
                    public void onChanged({{PASCAL}}UiState state) {
                        renderState(state);
                    }
                }
        );
    }

    private void renderState({{PASCAL}}UiState state) {
        // TODO: bind the state to the UI, e.g.
        // getBinding().progressBar.setVisibility(state.isLoading() ? View.VISIBLE : View.GONE);
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
        TemplateContext::new(NameForms::derive("order history"))
    }

    #[test]
    fn repository_impl_uses_camel_dao_accessor() {
        let body = repository_impl(&ctx());
        assert!(body.contains("db.orderHistoryDao()"));
        assert!(body.contains("public class OrderHistoryRepositoryImpl"));
    }

    #[test]
    fn entity_table_name_is_suffixed() {
        let body = entity(&ctx());
        assert!(body.contains("@Entity(tableName = \"orderhistory_table\")"));
    }

    #[test]
    fn no_template_leaves_placeholders() {
        let ctx = ctx();
        for body in [
            domain_model(&ctx),
            domain_repository(&ctx),
            use_case(&ctx),
            dto(&ctx),
            api_service(&ctx),
            entity(&ctx),
            dao(&ctx),
            repository_impl(&ctx),
            ui_state(&ctx),
            view_model(&ctx),
            fragment(&ctx),
        ] {
            assert!(!body.contains("{{"), "unrendered placeholder in: {body}");
        }
    }
}
