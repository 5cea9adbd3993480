//! Android (Kotlin/Java) template catalogs.
//!
//! Each submodule is one catalog: fixed source bodies keyed by the
//! `(language, DI)` selection, parameterized only through
//! [`TemplateContext`](featforge_core::domain::TemplateContext) placeholders.
//! Nothing here touches the filesystem.

pub mod dagger;
pub mod hilt;
pub mod java_core;
pub mod java_feature;
pub mod koin;
pub mod kotlin_core;
pub mod kotlin_feature;

/// Layout resource body for one feature screen
/// (`res/layout/fragment_<snake>.xml`). The body carries no name
/// references; the file is keyed by its snake-case name alone.
pub const LAYOUT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<androidx.constraintlayout.widget.ConstraintLayout
    xmlns:android="http://schemas.android.com/apk/res/android"
    xmlns:app="http://schemas.android.com/apk/res-auto"
    android:id="@+id/root"
    android:layout_width="match_parent"
    android:layout_height="match_parent">

    <ProgressBar
        android:id="@+id/progressBar"
        android:layout_width="48dp"
        android:layout_height="48dp"
        app:layout_constraintTop_toTopOf="parent"
        app:layout_constraintBottom_toBottomOf="parent"
        app:layout_constraintStart_toStartOf="parent"
        app:layout_constraintEnd_toEndOf="parent" />

    <LinearLayout
        android:id="@+id/errorGroup"
        android:layout_width="match_parent"
        android:layout_height="wrap_content"
        android:gravity="center"
        android:orientation="vertical"
        android:visibility="gone"
        app:layout_constraintTop_toTopOf="parent"
        app:layout_constraintBottom_toBottomOf="parent">

        <TextView
            android:id="@+id/errorText"
            android:layout_width="wrap_content"
            android:layout_height="wrap_content"
            android:text="Something went wrong" />
    </LinearLayout>

    <LinearLayout
        android:id="@+id/contentGroup"
        android:layout_width="match_parent"
        android:layout_height="match_parent"
        android:orientation="vertical"
        android:visibility="gone">

        <!-- TODO: RecyclerView or content view -->
    </LinearLayout>

</androidx.constraintlayout.widget.ConstraintLayout>
"#;
