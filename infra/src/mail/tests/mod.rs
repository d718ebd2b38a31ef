//! Tests for the SMTP mail service
