use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Used to correlate requests with responses over socket connections.
/// Not needed over plain HTTP, so it is always 1.
pub const REQUEST_ID: u64 = 1;

/// Things that can be turned into the positional `params` array of a request.
///
/// `()` means "no params" and becomes `[]` rather than `null`.
pub trait RpcParams {
    fn into_params(self) -> Result<Vec<Value>, serde_json::Error>;
}

impl RpcParams for () {
    fn into_params(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(Vec::new())
    }
}

impl RpcParams for Vec<Value> {
    fn into_params(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(self)
    }
}

/// Arrays are used as-is, `null` is no params, anything else is a single param.
impl RpcParams for Value {
    fn into_params(self) -> Result<Vec<Value>, serde_json::Error> {
        Ok(match self {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            other => vec![other],
        })
    }
}

macro_rules! impl_params_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Serialize),+> RpcParams for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_params(self) -> Result<Vec<Value>, serde_json::Error> {
                let ($($name,)+) = self;
                Ok(vec![$(serde_json::to_value($name)?),+])
            }
        }
    };
}

impl_params_for_tuple!(A);
impl_params_for_tuple!(A, B);
impl_params_for_tuple!(A, B, C);
impl_params_for_tuple!(A, B, C, D);

/// A JSON-RPC 2.0 request envelope. Built fresh for every call.
#[derive(Debug, Clone, Serialize)]
pub struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Vec<Value>,
}

impl<'a> Request<'a> {
    pub fn new<P: RpcParams>(method: &'a str, params: P) -> Result<Self> {
        if method.is_empty() {
            return Err(Error::EmptyMethod);
        }
        let params = params.into_params().map_err(|source| Error::Params {
            method: method.to_owned(),
            source,
        })?;
        Ok(Request {
            jsonrpc: JSONRPC_VERSION,
            id: REQUEST_ID,
            method,
            params,
        })
    }

    pub fn method(&self) -> &str {
        self.method
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }
}
