use serde::Serialize;
#[cfg(feature = "cli")]
use parking_lot::Mutex;
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};
use std::time::Instant;

/// `/health` 回應中附帶的行程資訊
#[derive(Debug, Clone, Serialize)]
pub struct ProcessStats {
    pub uptime_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_usage_mb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_memory_mb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f32>,
}

#[cfg(feature = "cli")]
pub struct ProcessMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    start_time: Instant,
    peak_memory: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl ProcessMonitor {
    pub fn new(enabled: bool) -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("Process monitoring unavailable: {}", e);
                None
            }
        };

        Self {
            system: Mutex::new(System::new()),
            pid,
            start_time: Instant::now(),
            peak_memory: Mutex::new(0),
            enabled,
        }
    }

    pub fn stats(&self) -> Option<ProcessStats> {
        if !self.enabled {
            return None;
        }

        let uptime_seconds = self.start_time.elapsed().as_secs();
        let Some(pid) = self.pid else {
            return Some(ProcessStats {
                uptime_seconds,
                memory_usage_mb: None,
                peak_memory_mb: None,
                cpu_usage: None,
            });
        };

        let mut system = self.system.lock();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );

        let process = system.process(pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        // 更新峰值記憶體
        let mut peak = self.peak_memory.lock();
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(ProcessStats {
            uptime_seconds,
            memory_usage_mb: Some(memory_mb),
            peak_memory_mb: Some(*peak),
            cpu_usage: Some(process.cpu_usage()),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

// 非 CLI 建置時只回報運行時間
#[cfg(not(feature = "cli"))]
pub struct ProcessMonitor {
    start_time: Instant,
    enabled: bool,
}

#[cfg(not(feature = "cli"))]
impl ProcessMonitor {
    pub fn new(enabled: bool) -> Self {
        Self {
            start_time: Instant::now(),
            enabled,
        }
    }

    pub fn stats(&self) -> Option<ProcessStats> {
        self.enabled.then(|| ProcessStats {
            uptime_seconds: self.start_time.elapsed().as_secs(),
            memory_usage_mb: None,
            peak_memory_mb: None,
            cpu_usage: None,
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for ProcessMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}
