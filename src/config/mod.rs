//! Configuration file handling for mvnfetch
//!
//! `mvnfetch.yaml` declares the artifacts `mvnfetch apply` keeps in place:
//!
//! ```yaml
//! repo_url: https://repo1.maven.org/maven2/
//! artifacts:
//!   - name: /opt/tools
//!     group_id: org.example
//!     artifact_id: demo
//!     version: "[1.0,2.0)"
//! ```

pub mod declaration;

pub use declaration::{ArtifactDeclaration, DEFAULT_DECLARATION_FILE, DeclarationFile};
