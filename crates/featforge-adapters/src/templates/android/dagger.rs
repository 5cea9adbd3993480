//! Dagger DI wiring module bodies (Java).

use featforge_core::domain::TemplateContext;

pub const NETWORK_MODULE: &str = r#"package core.di;

import java.util.concurrent.TimeUnit;

import javax.inject.Singleton;

import core.utils.Constants;
import dagger.Module;
import dagger.Provides;
import okhttp3.OkHttpClient;
import okhttp3.logging.HttpLoggingInterceptor;
import retrofit2.Retrofit;
import retrofit2.converter.moshi.MoshiConverterFactory;

@Module
public class NetworkModule {

    @Provides
    @Singleton
    OkHttpClient provideOkHttpClient() {
        HttpLoggingInterceptor logging = new HttpLoggingInterceptor();
        logging.level(HttpLoggingInterceptor.Level.BODY);

        return new OkHttpClient.Builder()
                .addInterceptor(logging)
                .connectTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
                .readTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
                .writeTimeout(Constants.NETWORK_TIMEOUT_SECONDS, TimeUnit.SECONDS)
                .build();
    }

    @Provides
    @Singleton
    Retrofit provideRetrofit(OkHttpClient client) {
        return new Retrofit.Builder()
                .baseUrl(Constants.BASE_URL)
                .client(client)
                .addConverterFactory(MoshiConverterFactory.create())
                .build();
    }
}
"#;

pub const DATABASE_MODULE: &str = r#"package core.di;

import android.app.Application;

import javax.inject.Singleton;

import androidx.room.Room;
import core.database.AppDatabase;
import core.utils.Constants;
import dagger.Module;
import dagger.Provides;

@Module
public class DatabaseModule {

    @Provides
    @Singleton
    AppDatabase provideDatabase(Application application) {
        return Room.databaseBuilder(
                application,
                AppDatabase.class,
                Constants.DB_NAME
        ).build();
    }
}
"#;

pub const DISPATCHER_MODULE: &str = r#"package core.di;

import javax.inject.Singleton;

import core.common.DispatcherProvider;
import dagger.Module;
import dagger.Provides;

@Module
public class DispatcherModule {

    @Provides
    @Singleton
    DispatcherProvider provideDispatcherProvider() {
        return new DispatcherProvider.DefaultDispatcherProvider();
    }
}
"#;

pub fn feature_module(ctx: &TemplateContext) -> String {
    ctx.render(
        r#"package features.{{LOWER}}.di;

import javax.inject.Singleton;

import core.database.AppDatabase;
import dagger.Module;
import dagger.Provides;
import retrofit2.Retrofit;
import features.{{LOWER}}.data.remote.{{PASCAL}}ApiService;
import features.{{LOWER}}.data.repository.{{PASCAL}}RepositoryImpl;
import features.{{LOWER}}.domain.repository.{{PASCAL}}Repository;

@Module
public class {{PASCAL}}Module {

    @Provides
    @Singleton
    {{PASCAL}}ApiService provide{{PASCAL}}Api(Retrofit retrofit) {
        return retrofit.create({{PASCAL}}ApiService.class);
    }

    @Provides
    @Singleton
    {{PASCAL}}Repository provide{{PASCAL}}Repository(
            AppDatabase db,
            {{PASCAL}}ApiService api
    ) {
        return new {{PASCAL}}RepositoryImpl(db, api);
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
    fn feature_module_provides_api_and_repository() {
        let ctx = TemplateContext::new(NameForms::derive("cart"));
        let body = feature_module(&ctx);

        assert!(body.contains("public class CartModule"));
        assert!(body.contains("retrofit.create(CartApiService.class)"));
        assert!(body.contains("new CartRepositoryImpl(db, api)"));
        assert!(!body.contains("{{"));
    }
}
