//! Fixed on-disk layout of a defect detection experiment project.

/// Directories created relative to the project root, in creation order.
pub const DIRECTORIES: &[&str] = &[
    "config",
    "data",
    "data/raw",
    "data/processed",
    "data/splits",
    "models",
    "models/components",
    "training",
    "training/stages",
    "evaluation",
    "evaluation/metrics",
    "utils",
    "notebooks",
    "scripts",
    "checkpoints",
    "logs",
    "results",
    "docs",
];

/// Empty package markers touched after the directory tree exists.
pub const MARKER_FILES: &[&str] = &[
    "config/__init__.py",
    "data/__init__.py",
    "models/__init__.py",
    "training/__init__.py",
    "evaluation/__init__.py",
    "utils/__init__.py",
];

pub const GITIGNORE_PATH: &str = ".gitignore";

pub const GITIGNORE_TEMPLATE: &str = r#"# Python
__pycache__/
*.py[cod]
*$py.class
*.so
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg

# Jupyter Notebook
.ipynb_checkpoints

# PyTorch
*.pth
*.pt

# Data and Results
data/raw/
data/processed/
checkpoints/
logs/
results/
*.log

# IDE
.vscode/
.idea/
*.swp
*.swo

# OS
.DS_Store
Thumbs.db

# Environment
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# Large files
*.zip
*.tar.gz
*.rar
"#;

/// Printed after a successful run.
pub const NEXT_STEPS: &[&str] = &[
    "Update config/config.py with your dataset path if needed",
    "Open Steel_Defect_Contrastive_Learning_Complete.ipynb",
    "Run the notebook cells sequentially",
    "Check results/ directory for outputs",
];

/// The scaffold written into a project root.
#[derive(Debug, Clone, Copy)]
pub struct ProjectLayout {
    pub directories: &'static [&'static str],
    pub marker_files: &'static [&'static str],
    pub gitignore: &'static str,
}

impl ProjectLayout {
    pub const fn standard() -> Self {
        Self { directories: DIRECTORIES, marker_files: MARKER_FILES, gitignore: GITIGNORE_TEMPLATE }
    }
}
