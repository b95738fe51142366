//! Access to the SKUs known to the store database.

use log::{debug, info};
use mysql::{Conn, OptsBuilder, prelude::Queryable};

use crate::{
    config::ConnectionParams,
    error::{MatchError, MatchResult},
};

pub const SKU_QUERY: &str = "SELECT sku FROM store_product";

/// Something that can list every known SKU, one at a time.
pub trait SkuSource {
    /// Feeds each SKU to `visit` in the order the source yields them.
    fn scan_skus(&mut self, visit: &mut dyn FnMut(String)) -> MatchResult<()>;
}

impl SkuSource for Vec<String> {
    fn scan_skus(&mut self, visit: &mut dyn FnMut(String)) -> MatchResult<()> {
        for sku in self.iter() {
            visit(sku.clone());
        }
        Ok(())
    }
}

/// A single live MySQL connection that runs [`SKU_QUERY`].
pub struct MySqlSkuSource {
    conn: Conn,
}

impl MySqlSkuSource {
    pub fn connect(params: &ConnectionParams) -> MatchResult<Self> {
        let opts = connection_opts(params)?;
        info!("Connecting to {}", params.redacted());
        let conn = Conn::new(opts).map_err(MatchError::Connect)?;
        Ok(Self { conn })
    }
}

impl SkuSource for MySqlSkuSource {
    fn scan_skus(&mut self, visit: &mut dyn FnMut(String)) -> MatchResult<()> {
        debug!("Executing '{SKU_QUERY}'");
        let result = self.conn.query_iter(SKU_QUERY).map_err(MatchError::Query)?;
        for (idx, row) in result.enumerate() {
            let row = row.map_err(|err| MatchError::Scan {
                row: idx + 1,
                message: err.to_string(),
            })?;
            let sku = mysql::from_row_opt::<String>(row).map_err(|err| MatchError::Scan {
                row: idx + 1,
                message: err.to_string(),
            })?;
            visit(sku);
        }
        Ok(())
    }
}

pub fn connection_opts(params: &ConnectionParams) -> MatchResult<OptsBuilder> {
    let mut builder = OptsBuilder::new()
        .user(Some(params.user.as_str()))
        .pass(Some(params.password.as_str()))
        .ip_or_hostname(Some(params.host.as_str()))
        .db_name(Some(params.database.as_str()));
    if let Some(port) = parse_port(&params.port)? {
        builder = builder.tcp_port(port);
    }
    Ok(builder)
}

/// An empty port leaves the driver default in place.
fn parse_port(value: &str) -> MatchResult<Option<u16>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|_| MatchError::InvalidPort(value.to_string()))
}
