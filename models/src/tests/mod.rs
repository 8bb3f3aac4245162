mod document_id;
mod schemas;
mod upload;
