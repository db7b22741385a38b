//! LogResultHandler - appends a reported result to the log.

use std::sync::Arc;
use tracing::{error, info};

use crate::domain::reporting::ResultRecord;
use crate::ports::{ResultSink, ResultSinkError};

/// Command carrying the reported result text.
///
/// The text is taken verbatim; an empty string is still a loggable
/// report.
#[derive(Debug, Clone)]
pub struct LogResultCommand {
    pub result: String,
}

/// Handler stamping and appending the record.
pub struct LogResultHandler {
    sink: Arc<dyn ResultSink>,
}

impl LogResultHandler {
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self { sink }
    }

    pub async fn handle(&self, command: LogResultCommand) -> Result<(), ResultSinkError> {
        let record = ResultRecord::now(command.result);
        match self.sink.append(&record).await {
            Ok(()) => {
                info!(result = %record.result, "result logged");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to log result");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSink {
        records: Mutex<Vec<ResultRecord>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new(fail: bool) -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl ResultSink for RecordingSink {
        async fn append(&self, record: &ResultRecord) -> Result<(), ResultSinkError> {
            if self.fail {
                return Err(ResultSinkError::Io("disk full".to_string()));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_appends_the_stamped_record() {
        let sink = Arc::new(RecordingSink::new(false));
        let handler = LogResultHandler::new(sink.clone());

        handler
            .handle(LogResultCommand {
                result: "452.78 kg CO2e (Grade C)".to_string(),
            })
            .await
            .unwrap();

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].result, "452.78 kg CO2e (Grade C)");
    }

    #[tokio::test]
    async fn test_empty_result_is_still_logged() {
        let sink = Arc::new(RecordingSink::new(false));
        let handler = LogResultHandler::new(sink.clone());

        handler
            .handle(LogResultCommand {
                result: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(sink.records.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_sink_failures_propagate() {
        let handler = LogResultHandler::new(Arc::new(RecordingSink::new(true)));
        let result = handler
            .handle(LogResultCommand {
                result: "anything".to_string(),
            })
            .await;
        assert!(matches!(result, Err(ResultSinkError::Io(_))));
    }
}
