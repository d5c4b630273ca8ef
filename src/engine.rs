use std::panic::{self, AssertUnwindSafe};

use itertools::Itertools;
use tracing::{debug, warn};

use crate::compare::compare;
use crate::context::Context;
use crate::errors::{LogError, Result};
use crate::extra::{describe_extras, Extra};
use crate::schema::{Record, Schema};
use crate::snapshot::snapshot;

/// Builds change descriptions for one record type.
///
/// Holds only borrowed metadata and options, so a single instance can be
/// shared freely between threads.
#[derive(Debug, Clone)]
pub struct ChangeLog<'s, T> {
    schema: &'s Schema<T>,
    ctx: Context,
}

impl<'s, T: Record> ChangeLog<'s, T> {
    pub fn new(schema: &'s Schema<T>) -> Self {
        Self::with_context(schema, Context::default())
    }

    pub fn with_context(schema: &'s Schema<T>, ctx: Context) -> Self {
        Self { schema, ctx }
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Describe what changed between `old` and `new`, plus any extras.
    ///
    /// Both present: field comparison. One present: a snapshot of it. Neither:
    /// extras only. Never returns an empty string; when nothing qualifies the
    /// "unchanged" phrase is returned. Faults raised anywhere below, panics
    /// included, come back as [`LogError::InternalFault`].
    ///
    /// A contained panic still runs the process panic hook, so the default
    /// hook prints its `panicked at` line to stderr. Callers that want silent
    /// containment install their own hook with [`std::panic::set_hook`].
    pub fn make_info(&self, old: Option<&T>, new: Option<&T>, extras: &[Extra]) -> Result<String> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.assemble(old, new, extras))) {
            Ok(res) => res,
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!(%reason, "recovered from panic while describing changes");
                Err(LogError::InternalFault(reason))
            }
        }
    }

    /// [`make_info`](Self::make_info) as a `(message, error)` pair.
    ///
    /// Invalid arguments give an empty message; contained faults give the
    /// phrasebook's recovery message.
    pub fn make_info_pair(&self, old: Option<&T>, new: Option<&T>, extras: &[Extra]) -> (String, Option<LogError>) {
        match self.make_info(old, new, extras) {
            Ok(info) => (info, None),
            Err(e @ LogError::InvalidArgument(_)) => (String::new(), Some(e)),
            Err(e @ LogError::InternalFault(_)) => (self.ctx.phrases.recovered.to_string(), Some(e)),
        }
    }

    fn assemble(&self, old: Option<&T>, new: Option<&T>, extras: &[Extra]) -> Result<String> {
        let phrases = &self.ctx.phrases;
        for (side, value) in [("old", old), ("new", new)] {
            if value.is_some_and(|v| !v.is_record()) {
                return Err(LogError::InvalidArgument(format!("{side} value must be a record")));
            }
        }

        let structural = match (old, new) {
            (Some(old), Some(new)) => {
                debug!(fields = self.schema.len(), "comparing two instances");
                compare(self.schema, old, new, phrases)?
            }
            (Some(one), None) | (None, Some(one)) => {
                debug!(deleted = old.is_some(), "describing single instance");
                snapshot(self.schema, one, phrases)?
            }
            (None, None) => Vec::new(),
        };
        let extra = describe_extras(extras, phrases);
        debug!(structural = structural.len(), extras = extra.len(), "assembled change description");

        if structural.is_empty() && extra.is_empty() {
            return Ok(phrases.unchanged.to_string());
        }
        Ok(structural.iter().chain(&extra).join(phrases.delimiter))
    }
}

/// Describe changes with the default (reference locale) context.
pub fn make_info<T: Record>(schema: &Schema<T>, old: Option<&T>, new: Option<&T>, extras: &[Extra]) -> Result<String> {
    ChangeLog::new(schema).make_info(old, new, extras)
}
