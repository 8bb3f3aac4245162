mod document_client;
