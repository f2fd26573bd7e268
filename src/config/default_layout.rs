use crate::filesystem::DirectoryTree;

/// The machine-learning project skeleton created when no descriptor is given.
///
/// Keep in sync with the structure section of the README.
pub fn default_layout() -> DirectoryTree {
    let src = DirectoryTree::new()
        .with_files(
            "data",
            [
                "__init__.py",
                "load_data.py",
                "split_data.py",
                "transformers.py",
            ],
        )
        .with_files("features", ["__init__.py", "build_features.py"])
        .with_files(
            "models",
            ["__init__.py", "train.py", "evaluate.py", "predict.py"],
        )
        .with_files("pipeline", ["__init__.py", "pipeline.py"])
        .with_files("utils", ["__init__.py", "logging.py", "metrics.py"]);

    let data = DirectoryTree::new()
        .with_files("raw", [".gitkeep"])
        .with_files("processed", [".gitkeep"]);

    DirectoryTree::new()
        .with_files("config", ["config.yaml", "config_prod.yaml"])
        .with_subtree("src", src)
        .with_subtree("data", data)
        .with_files("notebooks", [".gitkeep"])
        .with_files(
            "tests",
            ["test_data.py", "test_model.py", "test_pipeline.py"],
        )
        .with_files("docs", ["index.md", "usage_guide.md"])
        .with_files("scripts", [".gitkeep"])
        .with_files("models", [".gitkeep"])
        .with_files("docker", ["Dockerfile"])
        .with_files("mlflow", ["mlflow_tracking.py"])
        .with_files("fastapi", ["app.py", "routes.py"])
        .with_files("infra", [".gitkeep"])
        .with_files("ci", [".gitkeep"])
}
