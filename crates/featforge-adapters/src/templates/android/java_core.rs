//! Java core/common file bodies (Dagger target).

pub const RESOURCE: &str = r#"package core.common;

public abstract class Resource<T> {

    private Resource() {}

    public static final class Success<T> extends Resource<T> {
        private final T data;

        public Success(T data) {
            this.data = data;
        }

        public T getData() {
            return data;
        }
    }

    public static final class Error extends Resource<Object> {
        private final String message;
        private final Throwable throwable;

        public Error(String message, Throwable throwable) {
            this.message = message;
            this.throwable = throwable;
        }

        public String getMessage() {
            return message;
        }

        public Throwable getThrowable() {
            return throwable;
        }
    }

    public static final class Loading extends Resource<Object> {
        public static final Loading INSTANCE = new Loading();

        private Loading() {}
    }
}
"#;

pub const DISPATCHER_PROVIDER: &str = r#"package core.common;

import java.util.concurrent.Executor;
import java.util.concurrent.Executors;

public interface DispatcherProvider {
    Executor getIo();
    Executor getMain();

    class DefaultDispatcherProvider implements DispatcherProvider {

        private final Executor io = Executors.newCachedThreadPool();
        private final Executor main = Executors.newSingleThreadExecutor();

        @Override
        public Executor getIo() {
            return io;
        }

        @Override
        public Executor getMain() {
            return main;
        }
    }
}
"#;

pub const BASE_VIEW_MODEL: &str = r#"package core.common;

import androidx.lifecycle.ViewModel;

public abstract class BaseViewModel extends ViewModel {

    private final DispatcherProvider dispatcherProvider;

    public BaseViewModel(DispatcherProvider dispatcherProvider) {
        this.dispatcherProvider = dispatcherProvider;
    }

    protected void launchIo(Runnable block) {
        dispatcherProvider.getIo().execute(() -> {
            try {
                block.run();
            } catch (Throwable throwable) {
                onBackgroundError(throwable);
            }
        });
    }

    protected void onBackgroundError(Throwable throwable) {
        // override if needed
    }
}
"#;

pub const BASE_FRAGMENT: &str = r#"package core.common;

import android.os.Bundle;
import android.view.LayoutInflater;
import android.view.View;
import android.view.ViewGroup;

import androidx.annotation.NonNull;
import androidx.annotation.Nullable;
import androidx.fragment.app.Fragment;
import androidx.viewbinding.ViewBinding;

public abstract class BaseFragment<VB extends ViewBinding> extends Fragment {

    private VB binding;

    protected abstract VB inflateBinding(@NonNull LayoutInflater inflater,
                                         @Nullable ViewGroup container,
                                         boolean attachToParent);

    protected VB getBinding() {
        if (binding == null) {
            throw new IllegalStateException("Binding accessed before onCreateView or after onDestroyView");
        }
        return binding;
    }

    @Nullable
    @Override
    public View onCreateView(@NonNull LayoutInflater inflater,
                             @Nullable ViewGroup container,
                             @Nullable Bundle savedInstanceState) {
        binding = inflateBinding(inflater, container, false);
        return binding.getRoot();
    }

    @Override
    public void onDestroyView() {
        super.onDestroyView();
        binding = null;
    }
}
"#;

pub const ERROR_HANDLER: &str = r#"package core.common;

import java.io.IOException;

import retrofit2.HttpException;

public final class ErrorHandler {

    private ErrorHandler() {}

    public static String getErrorMessage(Throwable throwable) {
        if (throwable instanceof IOException) {
            return "Network error, please check your connection.";
        } else if (throwable instanceof HttpException) {
            HttpException http = (HttpException) throwable;
            return "Server error: " + http.code();
        } else {
            String msg = throwable.getLocalizedMessage();
            return msg != null ? msg : "Unexpected error occurred.";
        }
    }
}
"#;

pub const CONSTANTS: &str = r#"package core.utils;

public final class Constants {

    private Constants() {}

    public static final String BASE_URL = "https://api.example.com/";
    public static final String DB_NAME = "app_database.db";
    public static final long NETWORK_TIMEOUT_SECONDS = 30L;
}
"#;

pub const APP_DATABASE: &str = r#"package core.database;

import androidx.room.Database;
import androidx.room.RoomDatabase;

@Database(
        entities = {},
        version = 1,
        exportSchema = false
)
public abstract class AppDatabase extends RoomDatabase {
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_database_uses_brace_registration_list() {
        assert!(APP_DATABASE.contains("entities = {}"));
        assert!(APP_DATABASE.contains("@Database("));
        assert!(APP_DATABASE.trim_end().ends_with('}'));
    }
}
