//! Output generation (text reports, PlantUML documents, JSON dumps).

use cloudmap_error::{Error, ErrorKind, Result};
use cloudmap_render::{TextRenderer, render_diagram};
use cloudmap_topo::AccountTopology;

use crate::{CloudmapOptions, OutputFormat};

/// Render the account topology in the requested format.
pub fn generate_output(opts: &CloudmapOptions, account: &AccountTopology) -> Result<String> {
    match opts.format {
        OutputFormat::Text => {
            let mut buf = Vec::new();
            TextRenderer::default().render(opts.report_depth, account, &mut buf)?;
            String::from_utf8(buf).map_err(|e| {
                Error::unexpected("text report produced invalid UTF-8")
                    .with_operation("output::generate")
                    .set_source(e)
            })
        }
        OutputFormat::PlantUml => Ok(render_diagram(account)),
        OutputFormat::Json => serde_json::to_string_pretty(account).map_err(|e| {
            Error::new(ErrorKind::SerializeFailed, "topology serialization failed")
                .with_operation("output::generate")
                .set_source(e)
        }),
    }
}
