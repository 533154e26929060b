//! Execution observation for search runs
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod tracer;

pub use self::tracer::{ExecutionTracer, TraceEvent, TraceEventKind};
