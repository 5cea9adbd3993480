//! Kotlin feature-slice file bodies.
//!
//! One function per generated file, all rendered from a shared
//! [`TemplateContext`]. Package paths use the lowercased pascal form
//! (`{{LOWER}}`) while the on-disk feature directory uses camel case,
//! a long-standing convention of the generated projects.

use featforge_core::domain::TemplateContext;

pub fn domain_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.model

data class {{PASCAL}}(
    val id: Long,
    val title: String,
    val description: String
)
"#,
    )
}

pub fn domain_repository(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.repository

import core.common.Resource
import features.{{LOWER}}.domain.model.{{PASCAL}}
import kotlinx.coroutines.flow.Flow

interface {{PASCAL}}Repository {
    fun get{{PASCAL}}List(): Flow<Resource<List<{{PASCAL}}>>>
}
"#,
    )
}

pub fn use_case(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.domain.usecase

import core.common.Resource
import features.{{LOWER}}.domain.model.{{PASCAL}}
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository
import kotlinx.coroutines.flow.Flow
import javax.inject.Inject

class Get{{PASCAL}}ListUseCase @Inject constructor(
    private val repository: {{PASCAL}}Repository
) {
    operator fun invoke(): Flow<Resource<List<{{PASCAL}}>>> =
        repository.get{{PASCAL}}List()
}
"#,
    )
}

pub fn dto(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.remote.dto

import features.{{LOWER}}.domain.model.{{PASCAL}}

data class {{PASCAL}}Dto(
    val id: Long?,
    val title: String?,
    val description: String?
) {
    fun toDomain(): {{PASCAL}} = {{PASCAL}}(
        id = id ?: 0L,
        title = title.orEmpty(),
        description = description.orEmpty()
    )
}
"#,
    )
}

pub fn api_service(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.remote

import features.{{LOWER}}.data.remote.dto.{{PASCAL}}Dto
import retrofit2.http.GET

interface {{PASCAL}}ApiService {

    @GET("{{LOWER}}")
    suspend fun get{{PASCAL}}List(): List<{{PASCAL}}Dto>
}
"#,
    )
}

pub fn entity(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.local.entity

import androidx.room.Entity
import androidx.room.PrimaryKey
import features.{{LOWER}}.domain.model.{{PASCAL}}

@Entity(tableName = "{{LOWER}}")
data class {{PASCAL}}Entity(
    @PrimaryKey val id: Long,
    val title: String,
    val description: String
) {
    fun toDomain(): {{PASCAL}} = {{PASCAL}}(
        id = id,
        title = title,
        description = description
    )

    companion object {
        fun fromDomain(item: {{PASCAL}}): {{PASCAL}}Entity =
            {{PASCAL}}Entity(
                id = item.id,
                title = item.title,
                description = item.description
            )
    }
}
"#,
    )
}

pub fn dao(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.local.dao

import androidx.room.Dao
import androidx.room.Insert
import androidx.room.OnConflictStrategy
import androidx.room.Query
import features.{{LOWER}}.data.local.entity.{{PASCAL}}Entity

@Dao
interface {{PASCAL}}Dao {

    @Query("SELECT * FROM {{LOWER}}")
    suspend fun getAll(): List<{{PASCAL}}Entity>

    @Insert(onConflict = OnConflictStrategy.REPLACE)
    suspend fun insertAll(items: List<{{PASCAL}}Entity>)

    @Query("DELETE FROM {{LOWER}}")
    suspend fun clearAll()
}
"#,
    )
}

pub fn repository_impl(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.data.repository

import core.common.ErrorHandler
import core.common.Resource
import features.{{LOWER}}.data.local.dao.{{PASCAL}}Dao
import features.{{LOWER}}.data.local.entity.{{PASCAL}}Entity
import features.{{LOWER}}.data.remote.{{PASCAL}}ApiService
import features.{{LOWER}}.domain.model.{{PASCAL}}
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository
import kotlinx.coroutines.flow.Flow
import kotlinx.coroutines.flow.flow
import javax.inject.Inject

class {{PASCAL}}RepositoryImpl @Inject constructor(
    private val api: {{PASCAL}}ApiService,
    private val dao: {{PASCAL}}Dao
) : {{PASCAL}}Repository {

    override fun get{{PASCAL}}List(): Flow<Resource<List<{{PASCAL}}>>> = flow {
        emit(Resource.Loading)

        try {
            val remote = api.get{{PASCAL}}List().map { it.toDomain() }

            dao.clearAll()
            dao.insertAll(remote.map { {{PASCAL}}Entity.fromDomain(it) })

            emit(Resource.Success(remote))
        } catch (e: Throwable) {
            val cached = dao.getAll().map { it.toDomain() }

            if (cached.isNotEmpty()) {
                emit(Resource.Success(cached))
            } else {
                emit(Resource.Error(ErrorHandler.getErrorMessage(e), e))
            }
        }
    }
}
"#,
    )
}

pub fn ui_state(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.state

import features.{{LOWER}}.domain.model.{{PASCAL}}

sealed class {{PASCAL}}UiState {
    object Loading : {{PASCAL}}UiState()
    data class Success(val items: List<{{PASCAL}}>) : {{PASCAL}}UiState()
    data class Error(val message: String) : {{PASCAL}}UiState()
    object Empty : {{PASCAL}}UiState()
}
"#,
    )
}

pub fn view_model(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.viewmodel

import androidx.lifecycle.LiveData
import androidx.lifecycle.MutableLiveData
import core.common.BaseViewModel
import core.common.DispatcherProvider
import core.common.Resource
import dagger.hilt.android.lifecycle.HiltViewModel
import features.{{LOWER}}.domain.usecase.Get{{PASCAL}}ListUseCase
import features.{{LOWER}}.presentation.state.{{PASCAL}}UiState
import javax.inject.Inject

@HiltViewModel
class {{PASCAL}}ViewModel @Inject constructor(
    private val get{{PASCAL}}ListUseCase: Get{{PASCAL}}ListUseCase,
    dispatcherProvider: DispatcherProvider
) : BaseViewModel(dispatcherProvider) {

    private val _uiState = MutableLiveData<{{PASCAL}}UiState>()
    val uiState: LiveData<{{PASCAL}}UiState> = _uiState

    fun load{{PASCAL}}List() {
        _uiState.value = {{PASCAL}}UiState.Loading

        launchIo {
            get{{PASCAL}}ListUseCase().collect { result ->
                when (result) {
                    is Resource.Success -> {
                        val items = result.data
                        _uiState.postValue(
                            if (items.isEmpty()) {{PASCAL}}UiState.Empty
                            else {{PASCAL}}UiState.Success(items)
                        )
                    }

                    is Resource.Error ->
                        _uiState.postValue({{PASCAL}}UiState.Error(result.message))

                    is Resource.Loading ->
                        _uiState.postValue({{PASCAL}}UiState.Loading)
                }
            }
        }
    }
}
"#,
    )
}

pub fn fragment(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.presentation.ui

import android.os.Bundle
import android.view.View
import androidx.fragment.app.viewModels
import core.common.BaseFragment
import dagger.hilt.android.AndroidEntryPoint
import features.{{LOWER}}.databinding.Fragment{{PASCAL}}Binding
import features.{{LOWER}}.presentation.state.{{PASCAL}}UiState
import features.{{LOWER}}.presentation.viewmodel.{{PASCAL}}ViewModel

@AndroidEntryPoint
class {{PASCAL}}Fragment :
    BaseFragment<Fragment{{PASCAL}}Binding>(Fragment{{PASCAL}}Binding::inflate) {

    private val viewModel: {{PASCAL}}ViewModel by viewModels()

    override fun onViewCreated(view: View, savedInstanceState: Bundle?) {
        super.onViewCreated(view, savedInstanceState)

        observeUi()
        viewModel.load{{PASCAL}}List()
    }

    private fun observeUi() {
        viewModel.uiState.observe(viewLifecycleOwner) { state ->
            when (state) {
                is {{PASCAL}}UiState.Loading -> {
                    binding.progressBar.visibility = View.VISIBLE
                    binding.errorGroup.visibility = View.GONE
                    binding.contentGroup.visibility = View.GONE
                }
                is {{PASCAL}}UiState.Success -> {
                    binding.progressBar.visibility = View.GONE
                    binding.errorGroup.visibility = View.GONE
                    binding.contentGroup.visibility = View.VISIBLE
                }
                is {{PASCAL}}UiState.Error -> {
                    binding.progressBar.visibility = View.GONE
                    binding.errorGroup.visibility = View.VISIBLE
                    binding.contentGroup.visibility = View.GONE
                    binding.errorText.text = state.message
                }
                {{PASCAL}}UiState.Empty -> {
                    binding.progressBar.visibility = View.GONE
                    binding.errorGroup.visibility = View.GONE
                    binding.contentGroup.visibility = View.VISIBLE
                }
            }
        }
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
    fn domain_model_is_fully_rendered() {
        let body = domain_model(&ctx());
        assert!(body.contains("package features.orderhistory.domain.model"));
        assert!(body.contains("data class OrderHistory("));
        assert!(!body.contains("{{"));
    }

    #[test]
    fn entity_matches_patcher_expectations() {
        // The import line the patcher inserts must resolve to this file.
        let body = entity(&ctx());
        assert!(body.contains("package features.orderhistory.data.local.entity"));
        assert!(body.contains("data class OrderHistoryEntity("));
    }

    #[test]
    fn use_case_wires_repository() {
        let body = use_case(&ctx());
        assert!(body.contains("class GetOrderHistoryListUseCase @Inject constructor("));
        assert!(body.contains("repository.getOrderHistoryList()"));
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
