//! Hilt DI wiring module bodies (Kotlin).

use featforge_core::domain::TemplateContext;

pub const NETWORK_MODULE: &str = r#"package core.di

import core.utils.Constants
import dagger.Module
import dagger.Provides
import dagger.hilt.InstallIn
import dagger.hilt.components.SingletonComponent
import okhttp3.OkHttpClient
import okhttp3.logging.HttpLoggingInterceptor
import retrofit2.Retrofit
import retrofit2.converter.moshi.MoshiConverterFactory
import javax.inject.Singleton
import java.util.concurrent.TimeUnit

@Module
@InstallIn(SingletonComponent::class)
object NetworkModule {

    @Provides
    @Singleton
    fun provideOkHttpClient(): OkHttpClient {
        val logging = HttpLoggingInterceptor().apply {
            level = HttpLoggingInterceptor.Level.BODY
        }

        return OkHttpClient.Builder()
            .addInterceptor(logging)
            .connectTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .readTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .writeTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
            .build()
    }

    @Provides
    @Singleton
    fun provideRetrofit(client: OkHttpClient): Retrofit =
        Retrofit.Builder()
            .baseUrl(Constants.BASE_URL)
            .client(client)
            .addConverterFactory(MoshiConverterFactory.create())
            .build()
}
"#;

pub const DATABASE_MODULE: &str = r#"package core.di

import android.content.Context
import androidx.room.Room
import core.database.AppDatabase
import core.utils.Constants
import dagger.Module
import dagger.Provides
import dagger.hilt.InstallIn
import dagger.hilt.android.qualifiers.ApplicationContext
import dagger.hilt.components.SingletonComponent
import javax.inject.Singleton

@Module
@InstallIn(SingletonComponent::class)
object DatabaseModule {

    @Provides
    @Singleton
    fun provideDatabase(
        @ApplicationContext context: Context
    ): AppDatabase =
        Room.databaseBuilder(
            context,
            AppDatabase::class.java,
            Constants.DB_NAME
        ).build()
}
"#;

pub const DISPATCHER_MODULE: &str = r#"package core.di

import core.common.DefaultDispatcherProvider
import core.common.DispatcherProvider
import dagger.Module
import dagger.Provides
import dagger.hilt.InstallIn
import dagger.hilt.components.SingletonComponent
import javax.inject.Singleton

@Module
@InstallIn(SingletonComponent::class)
object DispatcherModule {

    @Provides
    @Singleton
    fun provideDispatcherProvider(): DispatcherProvider = DefaultDispatcherProvider()
}
"#;

pub fn feature_module(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.di

import core.database.AppDatabase
import dagger.Module
import dagger.Provides
import dagger.hilt.InstallIn
import dagger.hilt.components.SingletonComponent
import features.{{LOWER}}.data.local.dao.{{PASCAL}}Dao
import features.{{LOWER}}.data.remote.{{PASCAL}}ApiService
import features.{{LOWER}}.data.repository.{{PASCAL}}RepositoryImpl
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository
import retrofit2.Retrofit
import javax.inject.Singleton

@Module
@InstallIn(SingletonComponent::class)
object {{PASCAL}}Module {

    @Provides
    @Singleton
    fun provide{{PASCAL}}Api(retrofit: Retrofit): {{PASCAL}}ApiService =
        retrofit.create({{PASCAL}}ApiService::class.java)

    @Provides
    @Singleton
    fun provide{{PASCAL}}Dao(db: AppDatabase): {{PASCAL}}Dao =
        db.{{CAMEL}}Dao()

    @Provides
    @Singleton
    fun provide{{PASCAL}}Repository(
        api: {{PASCAL}}ApiService,
        dao: {{PASCAL}}Dao
    ): {{PASCAL}}Repository = {{PASCAL}}RepositoryImpl(api, dao)
}
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use featforge_core::domain::NameForms;

    #[test]
    fn feature_module_binds_api_dao_and_repository() {
        let ctx = TemplateContext::new(NameForms::derive("order history"));
        let body = feature_module(&ctx);

        assert!(body.contains("package features.orderhistory.di"));
        assert!(body.contains("object OrderHistoryModule"));
        assert!(body.contains("db.orderHistoryDao()"));
        assert!(body.contains("OrderHistoryRepositoryImpl(api, dao)"));
        assert!(!body.contains("{{"));
    }
}
