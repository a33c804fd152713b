//! Common test utilities for integration tests.
//!
//! Provides an in-memory employee store with call counters and failure
//! switches so cache and reconciler behavior can be observed without a
//! network.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

use roster::{Employee, EmployeeStore, NewEmployee, StoreError, StoreResult};

/// Build a named employee with the given salary.
#[allow(dead_code)]
pub fn employee(name: &str, salary: u32) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: Some(name.to_string()),
        salary,
        age: 35,
        title: "Engineer".to_string(),
        email: None,
    }
}

/// Build an employee without a name.
#[allow(dead_code)]
pub fn nameless_employee(salary: u32) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        name: None,
        salary,
        age: 35,
        title: "Engineer".to_string(),
        email: None,
    }
}

/// In-memory employee store that counts upstream calls.
///
/// `hidden` records resolve through `fetch_by_id` but are absent from
/// `fetch_all`, simulating a directory that lags behind the record being
/// targeted.
pub struct StubStore {
    employees: Mutex<Vec<Employee>>,
    hidden: Mutex<Vec<Employee>>,
    fetch_all_delay: Option<Duration>,
    fail_fetch_all: AtomicBool,
    decline_delete: AtomicBool,
    fail_delete: AtomicBool,
    /// Number of `fetch_all` calls that reached this store.
    pub fetch_all_calls: AtomicUsize,
    /// Number of `delete_by_name` calls that reached this store.
    pub delete_calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubStore {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(employees),
            hidden: Mutex::new(Vec::new()),
            fetch_all_delay: None,
            fail_fetch_all: AtomicBool::new(false),
            decline_delete: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
            fetch_all_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Delay every `fetch_all` so concurrent callers overlap.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_all_delay = Some(delay);
        self
    }

    /// Add a record reachable only through `fetch_by_id`.
    pub fn with_hidden(self, employee: Employee) -> Self {
        self.hidden.lock().unwrap().push(employee);
        self
    }

    /// Make `fetch_all` fail until switched back off.
    pub fn set_fail_fetch_all(&self, fail: bool) {
        self.fail_fetch_all.store(fail, Ordering::SeqCst);
    }

    /// Make `delete_by_name` answer `false` without deleting.
    pub fn set_decline_delete(&self, decline: bool) {
        self.decline_delete.store(decline, Ordering::SeqCst);
    }

    /// Make `delete_by_name` fail at the transport level.
    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeStore for StubStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Employee>> {
        self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.fetch_all_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_fetch_all.load(Ordering::SeqCst) {
            return Err(StoreError::Server {
                status: 500,
                body: "stub failure".to_string(),
            });
        }
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn fetch_by_id(&self, id: Uuid) -> StoreResult<Employee> {
        let listed = self.employees.lock().unwrap();
        let hidden = self.hidden.lock().unwrap();
        listed
            .iter()
            .chain(hidden.iter())
            .find(|employee| employee.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, payload: &NewEmployee) -> StoreResult<Employee> {
        let created = Employee {
            id: Uuid::new_v4(),
            name: Some(payload.name.clone()),
            salary: payload.salary,
            age: payload.age,
            title: payload.title.clone(),
            email: Some(format!(
                "{}@example.com",
                payload.name.to_lowercase().replace(' ', ".")
            )),
        };
        self.employees.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("stub connection reset".to_string()));
        }
        if self.decline_delete.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut employees = self.employees.lock().unwrap();
        let before = employees.len();
        employees.retain(|employee| employee.name.as_deref() != Some(name));
        Ok(employees.len() < before)
    }
}
