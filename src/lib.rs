//! Liveroot - layered root filesystem assembly for live images.
//!
//! Mounts a set of read-only squashfs archives, creates a writable overlay
//! and unions them into a single directory tree that the running system can
//! use as its root. All mount and unmount operations go through an external
//! command runner so the kernel-facing side stays a single injectable seam.

pub mod config;
pub mod fs;
pub mod mount;
