//! Property-based tests for the filter / sort / group pipeline.
