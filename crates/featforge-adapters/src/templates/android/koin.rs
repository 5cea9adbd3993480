//! Koin DI wiring module bodies (Kotlin).

use featforge_core::domain::TemplateContext;

pub const NETWORK_MODULE: &str = r#"package core.di

import core.utils.Constants
import okhttp3.OkHttpClient
import okhttp3.logging.HttpLoggingInterceptor
import org.koin.dsl.module
import retrofit2.Retrofit
import retrofit2.converter.moshi.MoshiConverterFactory
import java.util.concurrent.TimeUnit

val networkModule = module {

    single {
        val logging = HttpLoggingInterceptor().apply {
            level = HttpLoggingInterceptor.Level.BODY
        }

        OkHttpClient.Builder()
            .addInterceptor(logging)
            .connectTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .readTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .writeTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .build()
    }

    single {
        Retrofit.Builder()
            .baseUrl(Constants.BASE_URL)
            .client(get())
            .addConverterFactory(MoshiConverterFactory.create())
            .build()
    }
}
"#;

pub const DATABASE_MODULE: &str = r#"package core.di

import androidx.room.Room
import core.database.AppDatabase
import core.utils.Constants
import org.koin.android.ext.koin.androidApplication
import org.koin.dsl.module

val databaseModule = module {

    single<AppDatabase> {
        Room.databaseBuilder(
            androidApplication(),
            AppDatabase::class.java,
            Constants.DB_NAME
        ).build()
    }
}
"#;

pub const DISPATCHER_MODULE: &str = r#"package core.di

import core.common.DefaultDispatcherProvider
import core.common.DispatcherProvider
import org.koin.dsl.module

val dispatcherModule = module {

    single<DispatcherProvider> { DefaultDispatcherProvider() }
}
"#;

pub fn feature_module(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.di

import core.database.AppDatabase
import core.common.DispatcherProvider
import org.koin.androidx.viewmodel.dsl.viewModel
import org.koin.dsl.module
import retrofit2.Retrofit
import features.{{LOWER}}.data.local.dao.{{PASCAL}}Dao
import features.{{LOWER}}.data.remote.{{PASCAL}}ApiService
import features.{{LOWER}}.data.repository.{{PASCAL}}RepositoryImpl
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository
import features.{{LOWER}}.presentation.viewmodel.{{PASCAL}}ViewModel

val {{LOWER}}Module = module {

    single<{{PASCAL}}ApiService> {
        get<Retrofit>().create({{PASCAL}}ApiService::class.java)
    }

    single<{{PASCAL}}Dao> {
        get<AppDatabase>().{{CAMEL}}Dao()
    }

    single<{{PASCAL}}Repository> {
        {{PASCAL}}RepositoryImpl(
            api = get<{{PASCAL}}ApiService>(),
            dao = get<{{PASCAL}}Dao>()
        )
    }

    viewModel {
        {{PASCAL}}ViewModel(
            get{{PASCAL}}ListUseCase = get(),
            dispatcherProvider = get<DispatcherProvider>()
        )
    }
}
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    #[test]
    fn feature_module_declares_koin_bindings() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let body = feature_module(&ctx);

        assert!(body.contains("val cartModule = module {"));
        assert!(body.contains("single<CartRepository>"));
        assert!(body.contains("viewModel {"));
        assert!(!body.contains("{{"));
    }
}
