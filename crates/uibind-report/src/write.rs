use std::path::Path;

use uibind_common::write_atomic;
use uibind_model::BindingStore;

use crate::emit::{EmitOptions, generate_binding_source};
use crate::error::Result;

/// Render the store and replace the file at `path` with it.
///
/// Returns the rendered text.
pub fn write_binding_source(
    store: &BindingStore,
    options: &EmitOptions,
    path: &Path,
) -> Result<String> {
    let source = generate_binding_source(store, options);
    write_atomic(path, source.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        producers = store.iter().filter(|e| e.produce).count(),
        consumers = store.iter().filter(|e| e.consume).count(),
        grouped = store.iter().filter(|e| e.group).count(),
        "wrote binding source"
    );
    Ok(source)
}
